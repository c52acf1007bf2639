//! Mock collaborators shared by the crate's tests

use heapless::{Deque, String, Vec};

use crate::config::{Credentials, TransportTarget};
use crate::traits::{
    AttachError, Canvas, NetworkInterface, SessionError, Transport, TransportEvent,
};
use lumatrix_protocol::Rgb24;

const MAX_BINARY: usize = 2048;
const MAX_TEXT: usize = 256;
const MAX_EVENTS: usize = 16;
const MAX_SENT: usize = 8;

/// Scriptable network interface
pub struct MockNetwork {
    pub attach_result: Result<(), AttachError>,
    pub attached: bool,
    pub attach_calls: usize,
    pub detach_calls: usize,
}

impl MockNetwork {
    pub fn new() -> Self {
        Self {
            attach_result: Ok(()),
            attached: false,
            attach_calls: 0,
            detach_calls: 0,
        }
    }
}

impl NetworkInterface for MockNetwork {
    fn attach(&mut self, _credentials: &Credentials, _timeout_ms: u32) -> Result<(), AttachError> {
        self.attach_calls += 1;
        match self.attach_result {
            Ok(()) => {
                self.attached = true;
                Ok(())
            }
            Err(e) => {
                self.attached = false;
                Err(e)
            }
        }
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn detach(&mut self) {
        self.detach_calls += 1;
        self.attached = false;
    }
}

/// An event queued for delivery by [`MockTransport::poll`]
pub enum ScriptedEvent {
    Opened,
    Closed,
    Binary(Vec<u8, MAX_BINARY>),
    Text(String<MAX_TEXT>),
    Ping,
}

/// Scriptable transport session
pub struct MockTransport {
    pub open_result: Result<(), SessionError>,
    pub send_result: Result<(), SessionError>,
    /// Deliver an `Opened` event automatically after a successful open
    pub auto_open_event: bool,
    pub open_calls: usize,
    pub close_calls: usize,
    pub sent_texts: Vec<String<MAX_TEXT>, MAX_SENT>,
    open: bool,
    queue: Deque<ScriptedEvent, MAX_EVENTS>,
    current: Option<ScriptedEvent>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            open_result: Ok(()),
            send_result: Ok(()),
            auto_open_event: true,
            open_calls: 0,
            close_calls: 0,
            sent_texts: Vec::new(),
            open: false,
            queue: Deque::new(),
            current: None,
        }
    }

    /// Mark the session open without going through `open`
    pub fn force_open(&mut self) {
        self.open = true;
    }

    pub fn push_binary(&mut self, data: &[u8]) {
        let mut payload = Vec::new();
        payload.extend_from_slice(data).unwrap();
        self.queue.push_back(ScriptedEvent::Binary(payload)).ok();
    }

    pub fn push_text(&mut self, text: &str) {
        let mut payload = String::new();
        payload.push_str(text).unwrap();
        self.queue.push_back(ScriptedEvent::Text(payload)).ok();
    }

    pub fn push_ping(&mut self) {
        self.queue.push_back(ScriptedEvent::Ping).ok();
    }

    /// Simulate the peer (or the network) closing the session
    pub fn push_closed(&mut self) {
        self.open = false;
        self.queue.push_back(ScriptedEvent::Closed).ok();
    }
}

impl Transport for MockTransport {
    fn open(&mut self, _target: &TransportTarget) -> Result<(), SessionError> {
        self.open_calls += 1;
        match self.open_result {
            Ok(()) => {
                self.open = true;
                if self.auto_open_event {
                    self.queue.push_back(ScriptedEvent::Opened).ok();
                }
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn close(&mut self) {
        self.close_calls += 1;
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn poll(&mut self) -> Option<TransportEvent<'_>> {
        self.current = self.queue.pop_front();
        match &self.current {
            Some(ScriptedEvent::Opened) => Some(TransportEvent::Opened),
            Some(ScriptedEvent::Closed) => Some(TransportEvent::Closed),
            Some(ScriptedEvent::Binary(data)) => Some(TransportEvent::Binary(data)),
            Some(ScriptedEvent::Text(text)) => Some(TransportEvent::Text(text)),
            Some(ScriptedEvent::Ping) => Some(TransportEvent::Ping),
            None => None,
        }
    }

    fn send_text(&mut self, text: &str) -> Result<(), SessionError> {
        self.send_result?;
        let mut sent = String::new();
        sent.push_str(text).map_err(|_| SessionError::SendFailed)?;
        self.sent_texts.push(sent).map_err(|_| SessionError::SendFailed)?;
        Ok(())
    }
}

/// Double-buffered canvas over two fixed arrays
pub struct MockCanvas<const N: usize> {
    front: [Rgb24; N],
    back: [Rgb24; N],
    pub swap_calls: usize,
}

impl<const N: usize> MockCanvas<N> {
    pub fn new() -> Self {
        Self {
            front: [Rgb24::default(); N],
            back: [Rgb24::default(); N],
            swap_calls: 0,
        }
    }

    /// The currently visible buffer
    pub fn front(&self) -> &[Rgb24; N] {
        &self.front
    }
}

impl<const N: usize> Canvas for MockCanvas<N> {
    fn back_buffer(&mut self) -> &mut [Rgb24] {
        &mut self.back
    }

    fn swap(&mut self) {
        core::mem::swap(&mut self.front, &mut self.back);
        self.swap_calls += 1;
    }
}
