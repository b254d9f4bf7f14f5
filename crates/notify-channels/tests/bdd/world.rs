//! BDD test world for notify-channels

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use cucumber::World;
use notify_channels::io::{CommandRunner, HttpClient, HttpResponse};
use notify_channels::{CenterNotifier, NotificationError, Notifier, NotifyError, Transports};

/// One outbound call captured by [`RecordingTransport`]
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    Command {
        program: String,
        args: Vec<String>,
    },
    Post {
        url: String,
        headers: Vec<(String, String)>,
        params: Vec<(String, String)>,
        body: String,
    },
}

/// Records every dispatch instead of performing it
#[derive(Debug, Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<Dispatch>>,
    unreachable: AtomicBool,
}

impl RecordingTransport {
    pub fn set_unreachable(&self) {
        self.unreachable.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Dispatch> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, dispatch: Dispatch) -> bool {
        self.calls.lock().unwrap().push(dispatch);
        !self.unreachable.load(Ordering::SeqCst)
    }
}

impl HttpClient for RecordingTransport {
    fn post(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &str,
    ) -> notify_channels::Result<HttpResponse> {
        let reachable = self.record(Dispatch::Post {
            url: url.to_string(),
            headers: headers.to_vec(),
            params: Vec::new(),
            body: body.to_string(),
        });
        respond(reachable)
    }

    fn post_query(
        &self,
        url: &str,
        headers: &[(String, String)],
        params: &[(String, String)],
    ) -> notify_channels::Result<HttpResponse> {
        let reachable = self.record(Dispatch::Post {
            url: url.to_string(),
            headers: headers.to_vec(),
            params: params.to_vec(),
            body: String::new(),
        });
        respond(reachable)
    }
}

fn respond(reachable: bool) -> notify_channels::Result<HttpResponse> {
    if !reachable {
        return Err(NotifyError::Http("connection refused".to_string()));
    }
    Ok(HttpResponse {
        status: 200,
        body: "ok".to_string(),
    })
}

impl CommandRunner for RecordingTransport {
    fn run(&self, program: &str, args: &[String]) -> notify_channels::Result<Option<i32>> {
        let reachable = self.record(Dispatch::Command {
            program: program.to_string(),
            args: args.to_vec(),
        });
        if !reachable {
            return Err(NotifyError::Command(format!(
                "{} could not be started",
                program
            )));
        }
        Ok(Some(0))
    }
}

#[derive(Debug, Default, World)]
pub struct NotifyWorld {
    pub transport: Arc<RecordingTransport>,

    pub notifier: Option<Box<dyn Notifier>>,
    pub center: Option<CenterNotifier>,

    pub build_error: Option<NotificationError>,
    pub send_result: Option<notify_channels::Result<()>>,
}

impl NotifyWorld {
    pub fn transports(&self) -> Transports {
        Transports {
            http: Arc::clone(&self.transport) as Arc<dyn HttpClient>,
            commands: Arc::clone(&self.transport) as Arc<dyn CommandRunner>,
        }
    }

    /// The single recorded dispatch
    pub fn only_dispatch(&self) -> Dispatch {
        let calls = self.transport.calls();
        assert_eq!(calls.len(), 1, "expected exactly one dispatch, got {calls:?}");
        calls[0].clone()
    }

    /// The center notifier under test
    pub fn center(&self) -> &CenterNotifier {
        self.center.as_ref().expect("center notifier not set")
    }
}
