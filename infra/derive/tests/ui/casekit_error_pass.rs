use casekit_derive::casekit_error;
use std::borrow::Cow;

#[casekit_error]
pub enum DemoError {
    #[error("nothing to do")]
    Idle,

    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err = DemoError::from(std::io::Error::other("disk"));
    assert_eq!(err.kind(), "Io");
    assert_eq!(DemoError::Idle.kind(), "Idle");
}
