//! Fallbacks for unusable configuration values.
//!
//! Options mirror the host page's loose configuration: a missing, zero, or
//! non-finite value silently takes the default. The substitution is logged so
//! it does not go unnoticed during development.

pub(crate) fn positive_or(name: &str, value: f32, default: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        log::warn!("{} = {} is not usable, using {}", name, value, default);
        default
    }
}

pub(crate) fn count_or(name: &str, value: usize, default: usize) -> usize {
    if value > 0 {
        value
    } else {
        log::warn!("{} = 0 is not usable, using {}", name, default);
        default
    }
}

pub(crate) fn text_or(name: &str, value: String, default: &str) -> String {
    if value.trim().is_empty() {
        log::warn!("{} is empty, using {:?}", name, default);
        default.to_owned()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_usable_values() {
        assert_eq!(positive_or("ratio", 2.0, 1.5), 2.0);
        assert_eq!(count_or("count", 3, 5), 3);
        assert_eq!(text_or("class", "current".into(), "active"), "current");
    }

    #[test]
    fn substitutes_unusable_values() {
        assert_eq!(positive_or("ratio", 0.0, 1.5), 1.5);
        assert_eq!(positive_or("ratio", -4.0, 1.5), 1.5);
        assert_eq!(positive_or("ratio", f32::NAN, 1.5), 1.5);
        assert_eq!(count_or("count", 0, 5), 5);
        assert_eq!(text_or("class", "  ".into(), "active"), "active");
    }
}
