//! Typing-target detection.

use crate::models::{ElementInfo, ElementTag, TargetKind};

/// Input types the keyboard types into.
pub const TEXT_INPUT_TYPES: [&str; 7] = [
    "text", "password", "email", "search", "url", "tel", "number",
];

/// Classifies an element. Absent elements are never targets.
#[must_use]
pub fn classify(element: Option<&ElementInfo>) -> TargetKind {
    let Some(element) = element else {
        return TargetKind::NotATarget;
    };

    match &element.tag {
        ElementTag::Input if is_text_input_type(element.input_type.as_deref()) => {
            TargetKind::TextField
        }
        ElementTag::TextArea => TargetKind::TextArea,
        _ if element.editable => TargetKind::EditableRegion,
        _ => TargetKind::NotATarget,
    }
}

/// Returns true if the keyboard should open for this element.
#[must_use]
pub fn is_typing_target(element: Option<&ElementInfo>) -> bool {
    classify(element).is_target()
}

// A missing type attribute means "text".
fn is_text_input_type(input_type: Option<&str>) -> bool {
    input_type.map_or(true, |kind| {
        TEXT_INPUT_TYPES.contains(&kind.to_lowercase().as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_like_inputs() {
        for kind in TEXT_INPUT_TYPES {
            assert_eq!(
                classify(Some(&ElementInfo::input(kind))),
                TargetKind::TextField,
                "{kind} should be a text field"
            );
        }
        assert_eq!(
            classify(Some(&ElementInfo::input("Password"))),
            TargetKind::TextField
        );
    }

    #[test]
    fn test_untyped_input_defaults_to_text() {
        let info = ElementInfo {
            tag: ElementTag::Input,
            input_type: None,
            editable: false,
        };
        assert_eq!(classify(Some(&info)), TargetKind::TextField);
    }

    #[test]
    fn test_non_text_inputs() {
        for kind in [
            "checkbox", "radio", "submit", "file", "range", "date", "color",
        ] {
            assert!(!is_typing_target(Some(&ElementInfo::input(kind))), "{kind}");
        }
    }

    #[test]
    fn test_textarea_and_editable_regions() {
        assert_eq!(
            classify(Some(&ElementInfo::textarea())),
            TargetKind::TextArea
        );
        assert_eq!(
            classify(Some(&ElementInfo::other("div", true))),
            TargetKind::EditableRegion
        );
        assert_eq!(
            classify(Some(&ElementInfo::other("div", false))),
            TargetKind::NotATarget
        );
    }

    #[test]
    fn test_editable_flag_wins_over_non_text_input() {
        let mut info = ElementInfo::input("checkbox");
        info.editable = true;
        assert_eq!(classify(Some(&info)), TargetKind::EditableRegion);
    }

    #[test]
    fn test_absent_element() {
        assert_eq!(classify(None), TargetKind::NotATarget);
        assert!(!is_typing_target(None));
    }
}
