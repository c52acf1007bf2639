//! Cooperative node loop
//!
//! [`MatrixNode`] owns the three platform collaborators plus the
//! supervisor and protocol handler, and drives them from a single logical
//! thread. One [`MatrixNode::poll`] call is one loop iteration: drain one
//! bounded batch of transport events in receipt order, check network
//! health, apply the reconnect policy, return. The caller yields between
//! iterations.
//!
//! Nothing in here locks: the back buffer has exactly one writer by
//! construction, and a decode-and-swap sequence always completes before
//! the next event is looked at.

use lumatrix_protocol::{JoinMessage, Rgb24};

use crate::config::NodeConfig;
use crate::handler::{HandlerAction, ProtocolHandler, ReconnectAction};
use crate::link::{FatalError, Supervisor};
use crate::traits::{Canvas, NetworkInterface, Transport};

/// Upper bound on events processed per loop iteration
pub const MAX_EVENTS_PER_POLL: usize = 8;

/// Shown while the node boots, before the first frame arrives
const BOOT_COLOR: Rgb24 = Rgb24::new(0, 0, 30);

/// The display node core
pub struct MatrixNode<N, T, C> {
    config: NodeConfig,
    network: N,
    transport: T,
    canvas: C,
    supervisor: Supervisor,
    handler: ProtocolHandler,
    last_attach_attempt_ms: Option<u32>,
}

impl<N, T, C> MatrixNode<N, T, C>
where
    N: NetworkInterface,
    T: Transport,
    C: Canvas,
{
    pub fn new(config: NodeConfig, network: N, transport: T, canvas: C) -> Self {
        Self {
            config,
            network,
            transport,
            canvas,
            supervisor: Supervisor::new(),
            handler: ProtocolHandler::new(),
            last_attach_attempt_ms: None,
        }
    }

    /// Current connectivity state, for the platform's status reporting
    pub fn supervisor(&self) -> &Supervisor {
        &self.supervisor
    }

    /// Successfully displayed frames since boot
    pub fn frames_shown(&self) -> u32 {
        self.handler.frames_shown()
    }

    /// Boot the node: paint the boot pattern, attach the network, open
    /// the first session.
    ///
    /// A fatal attach timeout propagates to the caller, whose only
    /// sensible response is a full process restart. A plain attach
    /// failure is absorbed; [`MatrixNode::poll`] keeps retrying.
    pub fn start(&mut self, now_ms: u32) -> Result<(), FatalError> {
        info!(
            "node starting, pair {}, {} mode",
            self.config.pair,
            self.config.credentials.mode_name()
        );
        self.paint_boot_pattern();

        self.attach(now_ms)?;
        if self.supervisor.state().network_attached() {
            self.try_open_session(now_ms);
        }
        Ok(())
    }

    /// One cooperative loop iteration
    pub fn poll(&mut self, now_ms: u32) -> Result<(), FatalError> {
        // 1. One bounded batch of transport events, strictly in order
        for _ in 0..MAX_EVENTS_PER_POLL {
            let action = match self.transport.poll() {
                Some(event) => {
                    self.handler
                        .on_event(&event, &mut self.canvas, &mut self.supervisor, now_ms)
                }
                None => break,
            };
            match action {
                HandlerAction::SendJoin => self.send_join(),
                HandlerAction::None => {}
            }
        }

        // 2. Network attachment health
        if self.supervisor.state().network_attached() && !self.network.is_attached() {
            warn!("network attachment lost");
            self.supervisor.on_network_lost(&mut self.transport);
        }

        if !self.supervisor.state().network_attached() {
            if self.attach_due(now_ms) {
                self.attach(now_ms)?;
                if self.supervisor.state().network_attached() {
                    // The session follows the network straight away
                    self.try_open_session(now_ms);
                }
            }
            return Ok(());
        }

        // 3. Session reconnect policy
        match self
            .handler
            .reconnect_action(self.supervisor.state(), now_ms, &self.config)
        {
            ReconnectAction::Reconnect { verify_network } => {
                if verify_network && !self.network.is_attached() {
                    warn!("repeated session failures, network attachment gone");
                    self.supervisor.on_network_lost(&mut self.transport);
                    // Re-attach on the next iteration
                    return Ok(());
                }
                info!("reconnecting session");
                self.try_open_session(now_ms);
            }
            ReconnectAction::Wait | ReconnectAction::None => {}
        }

        Ok(())
    }

    fn attach(&mut self, now_ms: u32) -> Result<(), FatalError> {
        self.last_attach_attempt_ms = Some(now_ms);
        self.supervisor.attach_network(
            &mut self.network,
            &mut self.transport,
            &self.config.credentials,
            self.config.attach_timeout_ms,
            now_ms,
        )
    }

    /// Rate limit for attach retries after a plain (non-timeout) failure
    fn attach_due(&self, now_ms: u32) -> bool {
        match self.last_attach_attempt_ms {
            None => true,
            Some(at) => now_ms.wrapping_sub(at) >= self.config.reconnect_delay_ms,
        }
    }

    fn try_open_session(&mut self, now_ms: u32) {
        if let Err(e) = self
            .supervisor
            .open_session(&mut self.transport, &self.config.target)
        {
            warn!("session open failed: {}", e);
            self.handler.record_failure(now_ms);
        }
    }

    fn send_join(&mut self) {
        match JoinMessage::new(self.config.pair).encode() {
            Ok(join) => match self.transport.send_text(&join) {
                Ok(()) => info!("joined as matrix, pair {}", self.config.pair),
                Err(e) => warn!("join send failed: {}", e),
            },
            Err(e) => warn!("join encode failed: {}", e),
        }
    }

    fn paint_boot_pattern(&mut self) {
        for pixel in self.canvas.back_buffer().iter_mut() {
            *pixel = BOOT_COLOR;
        }
        self.canvas.swap();
    }
}
