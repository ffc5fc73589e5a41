use ectl_derive::ectl_error;
use std::borrow::Cow;

#[ectl_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Unknown key{}: {key}", format_context(.context))]
    UnknownKey { key: String, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: DemoError = "boom".into();
    assert_eq!(err.kind(), "Internal");

    let err = Err::<(), _>(DemoError::UnknownKey { key: "k".to_owned(), context: None })
        .context("lookup")
        .unwrap_err();
    assert_eq!(err.kind(), "UnknownKey");
    assert_eq!(err.to_string(), "Unknown key (lookup): k");
}
