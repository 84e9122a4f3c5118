use std::fmt;

use wasm_bindgen::JsValue;

/// Failures while talking to the DOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebAdapterError {
    NoWindow,
    NoDocument,
    /// A sink was asked to style an element it was not built with.
    MissingElement(&'static str),
    NotAnHtmlElement,
    ItemOutOfRange {
        index: usize,
        len: usize,
    },
    /// An exception thrown by a DOM call.
    Js(String),
}

impl fmt::Display for WebAdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebAdapterError::NoWindow => write!(f, "no global window exists"),
            WebAdapterError::NoDocument => write!(f, "window has no document"),
            WebAdapterError::MissingElement(role) => write!(f, "no {} element bound", role),
            WebAdapterError::NotAnHtmlElement => write!(f, "node is not an HTML element"),
            WebAdapterError::ItemOutOfRange { index, len } => {
                write!(f, "item {} out of range ({} items bound)", index, len)
            }
            WebAdapterError::Js(message) => write!(f, "DOM call failed: {}", message),
        }
    }
}

impl std::error::Error for WebAdapterError {}

impl From<JsValue> for WebAdapterError {
    fn from(value: JsValue) -> Self {
        WebAdapterError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_part() {
        assert_eq!(
            WebAdapterError::MissingElement("track").to_string(),
            "no track element bound"
        );
        assert_eq!(
            WebAdapterError::ItemOutOfRange { index: 7, len: 5 }.to_string(),
            "item 7 out of range (5 items bound)"
        );
    }
}
