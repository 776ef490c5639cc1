//! Executor: native -> JavaScript calls.
//!
//! A host view only has to implement [`ScriptHost`] (evaluate a script and
//! report the outcome later). Every `ScriptHost` gets [`Executor`] for free,
//! which knows how to address `tigon.js` responses.
//!
//! Evaluation failures are logged and go no further: by the time a script
//! fails, the handler that produced the response has already returned.

use std::fmt;
use std::io::Write;
use std::sync::Mutex;

use tigon_core::error::{Result, TigonError};
use tigon_core::protocol::script::{encode_error, encode_message, encode_success, ScriptCall};
use tigon_core::protocol::{stringify, ResponseValue};

/// Called once when the web runtime has evaluated (or failed to evaluate) a script.
pub type ScriptCompletion = Box<dyn FnOnce(Result<()>) + Send>;

/// The host view's ability to run a script in its web runtime.
pub trait ScriptHost: Send + Sync {
    fn submit_script(&self, script: String, completion: ScriptCompletion);
}

/// Bridge-level calls into `tigon.js`.
pub trait Executor {
    /// Submit a script, fire-and-forget.
    fn execute_script(&self, script: ScriptCall);

    /// Resolve the script-side request `id`.
    fn send_success_response(&self, id: &str, response: impl Into<ResponseValue>) {
        self.execute_script(encode_success(id, &response.into()));
    }

    /// Reject the script-side request `id` with the message of `error`.
    fn send_error_response<E: fmt::Display + ?Sized>(&self, id: &str, error: &E) {
        self.execute_script(encode_error(id, error));
    }

    /// Push an unsolicited message; `message` may be a stringified object.
    fn send_message(&self, message: &str) {
        self.execute_script(encode_message(message));
    }

    fn stringify_response(&self, response: impl Into<ResponseValue>) -> String {
        stringify(&response.into())
    }
}

impl<T: ScriptHost + ?Sized> Executor for T {
    fn execute_script(&self, script: ScriptCall) {
        let script = script.into_string();
        let submitted = script.clone();
        self.submit_script(
            script,
            Box::new(move |res| {
                if let Err(e) = res {
                    tracing::error!(
                        script = %submitted,
                        error = %e,
                        "failed to evaluate javascript"
                    );
                }
            }),
        );
    }
}

/// Script host that writes each script as one line to a writer.
///
/// Used by the headless host (stdout) and handy in tests (`Vec<u8>`).
pub struct WriterHost<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> WriterHost<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> Result<W> {
        self.out
            .into_inner()
            .map_err(|_| TigonError::Internal("writer lock poisoned".into()))
    }
}

impl<W: Write + Send> ScriptHost for WriterHost<W> {
    fn submit_script(&self, script: String, completion: ScriptCompletion) {
        let res = match self.out.lock() {
            Ok(mut out) => writeln!(out, "{script}")
                .and_then(|_| out.flush())
                .map_err(|e| TigonError::Script(e.to_string())),
            Err(_) => Err(TigonError::Internal("writer lock poisoned".into())),
        };
        completion(res);
    }
}
