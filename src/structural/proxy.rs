// Proxy: stands in for the real subject behind the same interface, checks
// access before delegating and logs afterwards.

use crate::trace::Trace;
use tracing::{debug, warn};

pub trait Subject {
    fn request(&self, trace: &mut Trace);
}

#[derive(Debug, Default)]
pub struct RealSubject;

impl Subject for RealSubject {
    fn request(&self, trace: &mut Trace) {
        trace.line("RealSubject: Handling request.");
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AccessPolicy {
    #[default]
    Allow,
    Deny,
}

pub struct Proxy {
    real_subject: RealSubject,
    policy: AccessPolicy,
}

impl Proxy {
    pub fn new(real_subject: RealSubject) -> Self {
        Self::with_policy(real_subject, AccessPolicy::Allow)
    }

    pub fn with_policy(real_subject: RealSubject, policy: AccessPolicy) -> Self {
        Self { real_subject, policy }
    }

    fn check_access(&self, trace: &mut Trace) -> bool {
        trace.line("Proxy: Checking access prior to firing a real request.");
        self.policy == AccessPolicy::Allow
    }

    fn log_access(&self, trace: &mut Trace) {
        debug!("proxy delegated request");
        trace.line("Proxy: Logging the time of request.");
    }
}

impl Subject for Proxy {
    fn request(&self, trace: &mut Trace) {
        if self.check_access(trace) {
            self.real_subject.request(trace);
            self.log_access(trace);
        } else {
            warn!("proxy denied request");
            trace.line("Proxy: Access denied.");
        }
    }
}

pub fn client_code(subject: &dyn Subject, trace: &mut Trace) {
    subject.request(trace);
}

pub fn demo() -> Trace {
    let mut trace = Trace::new();

    trace.line("Client: Executing the client code with a real subject:");
    let real_subject = RealSubject;
    client_code(&real_subject, &mut trace);
    trace.blank();

    trace.line("Client: Executing the same client code with a proxy:");
    let proxy = Proxy::new(real_subject);
    client_code(&proxy, &mut trace);
    trace.blank();

    trace.line("Client: Executing the same client code with a denying proxy:");
    let guarded = Proxy::with_policy(RealSubject, AccessPolicy::Deny);
    client_code(&guarded, &mut trace);

    trace
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_allowed_request_is_wrapped() {
        let mut trace = Trace::new();
        Proxy::new(RealSubject).request(&mut trace);
        assert_eq!(
            trace.into_lines(),
            vec![
                "Proxy: Checking access prior to firing a real request.",
                "RealSubject: Handling request.",
                "Proxy: Logging the time of request.",
            ]
        );
    }

    #[test]
    fn test_denied_request_skips_delegation_and_logging() {
        let mut trace = Trace::new();
        Proxy::with_policy(RealSubject, AccessPolicy::Deny).request(&mut trace);
        assert_eq!(
            trace.into_lines(),
            vec![
                "Proxy: Checking access prior to firing a real request.",
                "Proxy: Access denied.",
            ]
        );
    }

    #[test]
    fn test_demo() {
        let trace = demo();
        assert_eq!(trace.lines()[1], "RealSubject: Handling request.");
        assert_eq!(
            trace.lines().last().map(String::as_str),
            Some("Proxy: Access denied.")
        );
    }
}
