use casekit_derive::casekit_error;

#[casekit_error]
pub enum Signal {
    #[error("stop")]
    Stop,
    #[error("go")]
    Go,
}

fn main() {
    assert_eq!(Signal::Stop.kind(), "Stop");
    assert_eq!(Signal::Go.to_string(), "go");
}
