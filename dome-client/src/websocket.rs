//! Dome WebSocket client for real-time order events
//!
//! Connects to the Dome event stream, sends subscribe frames, and dispatches
//! inbound ack/event frames to registered handlers. Malformed frames, unknown
//! frame types, and transport errors never take the stream down; a dropped
//! connection simply ends the run loop. There is no automatic reconnect;
//! retry policy belongs to the caller.

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::mpsc;
use tokio::time::{interval, Instant};
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{debug, info, warn};

use dome_core::{DomeError, DomeResult};

/// Dome WebSocket base URL; the API key is appended as the path
const DOME_WS_URL: &str = "wss://ws.domeapi.io";

/// Default subscribe protocol version
const DEFAULT_VERSION: u32 = 1;

/// How often the run loop checks the deadline
const DEADLINE_POLL: Duration = Duration::from_secs(1);

type EventHandler = Box<dyn Fn(Value) + Send + Sync>;
type AckHandler = Box<dyn Fn(Option<String>) + Send + Sync>;

/// Outbound subscribe frame
#[derive(Debug, Clone, Serialize)]
pub struct SubscribeRequest {
    pub action: String,
    /// Venue, e.g. "polymarket"
    pub platform: String,
    pub version: u32,
    /// Channel, e.g. "orders"
    #[serde(rename = "type")]
    pub channel: String,
    /// Channel filters, e.g. `{"users": ["0x..."]}`
    pub filters: Value,
}

impl SubscribeRequest {
    pub fn new(platform: impl Into<String>, channel: impl Into<String>, filters: Value) -> Self {
        Self {
            action: "subscribe".to_string(),
            platform: platform.into(),
            version: DEFAULT_VERSION,
            channel: channel.into(),
            filters,
        }
    }
}

/// Inbound frames the stream recognizes; anything else is ignored
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum InboundFrame {
    Ack {
        #[serde(default)]
        subscription_id: Option<String>,
    },
    Event {
        #[serde(default)]
        data: Option<Value>,
    },
    #[serde(other)]
    Other,
}

/// Commands sent from the caller into the run loop
enum Command {
    Subscribe(SubscribeRequest),
    Close,
}

/// Handle passed to the `on_open` callback (and cloneable from there) for
/// issuing subscribe requests while the connection is open.
///
/// Sends are fire-and-forget: frames are queued onto the run loop, which is
/// the single writer on the socket. Once the connection has closed, sends are
/// silently dropped.
#[derive(Clone)]
pub struct SubscribeHandle {
    tx: mpsc::UnboundedSender<Command>,
}

impl SubscribeHandle {
    /// Subscribe to a channel, e.g. `subscribe("polymarket", "orders",
    /// json!({"users": ["0x..."]}))`
    pub fn subscribe(&self, platform: &str, channel: &str, filters: Value) {
        self.send(SubscribeRequest::new(platform, channel, filters));
    }

    /// Subscribe with an explicit protocol version
    pub fn subscribe_with_version(
        &self,
        platform: &str,
        version: u32,
        channel: &str,
        filters: Value,
    ) {
        let mut request = SubscribeRequest::new(platform, channel, filters);
        request.version = version;
        self.send(request);
    }

    /// Send a prebuilt subscribe frame
    pub fn send(&self, request: SubscribeRequest) {
        let _ = self.tx.send(Command::Subscribe(request));
    }

    /// Ask the run loop to close the connection
    pub fn close(&self) {
        let _ = self.tx.send(Command::Close);
    }
}

/// Dome WebSocket client.
///
/// Register handlers first, then drive the connection with [`run`](Self::run):
///
/// ```no_run
/// # use dome_client::websocket::DomeWebSocket;
/// # use serde_json::json;
/// # async fn demo() -> dome_core::DomeResult<()> {
/// let mut ws = DomeWebSocket::new("my-api-key")
///     .on_ack(|sid| println!("subscribed: {:?}", sid))
///     .on_event(|data| println!("order: {}", data));
///
/// ws.run(Some(std::time::Duration::from_secs(60)), |sub| {
///     sub.subscribe("polymarket", "orders", json!({"users": ["0xabc"]}));
/// })
/// .await
/// # }
/// ```
///
/// Handlers run on the connection task, out-of-band from the caller's flow.
pub struct DomeWebSocket {
    api_key: String,
    ws_url: String,
    subscription_ids: Vec<String>,
    on_event: Option<EventHandler>,
    on_ack: Option<AckHandler>,
}

impl DomeWebSocket {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ws_url: DOME_WS_URL.to_string(),
            subscription_ids: Vec::new(),
            on_event: None,
            on_ack: None,
        }
    }

    /// Create a client from the `DOME_API_KEY` environment variable
    pub fn from_env() -> Self {
        Self::new(std::env::var("DOME_API_KEY").unwrap_or_default())
    }

    /// Register a handler for event frames; receives the frame's `data` value
    pub fn on_event(mut self, handler: impl Fn(Value) + Send + Sync + 'static) -> Self {
        self.on_event = Some(Box::new(handler));
        self
    }

    /// Register a handler for subscription acks; receives the subscription id
    /// carried by the ack frame
    pub fn on_ack(mut self, handler: impl Fn(Option<String>) + Send + Sync + 'static) -> Self {
        self.on_ack = Some(Box::new(handler));
        self
    }

    /// Subscription ids confirmed so far, in ack-arrival order.
    ///
    /// Duplicates are retained: the server acks each subscribe frame, and a
    /// repeated subscription is meaningful to the caller's bookkeeping.
    pub fn subscription_ids(&self) -> &[String] {
        &self.subscription_ids
    }

    /// Connect and drive the event loop until the connection closes, the
    /// caller closes it, or `run_for` elapses (checked about once a second).
    ///
    /// `on_open` is invoked once the connection is open, with a
    /// [`SubscribeHandle`] for issuing subscribe requests.
    ///
    /// A blank API key fails with [`DomeError::Config`] before any network
    /// attempt. Transport noise after that never surfaces as an error.
    pub async fn run<F>(&mut self, run_for: Option<Duration>, on_open: F) -> DomeResult<()>
    where
        F: FnOnce(&SubscribeHandle),
    {
        if self.api_key.trim().is_empty() {
            return Err(DomeError::config("DOME_API_KEY is not set"));
        }

        let url = format!("{}/{}", self.ws_url, self.api_key);
        let deadline = run_for.map(|d| Instant::now() + d);

        info!("Connecting to Dome WebSocket");
        let (ws_stream, _) = match connect_async(url.as_str()).await {
            Ok(conn) => conn,
            Err(e) => {
                warn!("WebSocket connection failed: {}", e);
                return Ok(());
            }
        };
        info!("Connected");

        let (mut write, mut read) = ws_stream.split();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = SubscribeHandle { tx };
        on_open(&handle);

        let mut ticker = interval(DEADLINE_POLL);

        loop {
            tokio::select! {
                msg = read.next() => {
                    match msg {
                        Some(Ok(Message::Text(text))) => self.handle_frame(text.as_str()),
                        Some(Ok(Message::Ping(data))) => {
                            if write.send(Message::Pong(data)).await.is_err() {
                                break;
                            }
                        }
                        Some(Ok(Message::Close(_))) => {
                            info!("Connection closed by server");
                            break;
                        }
                        Some(Err(e)) => {
                            // stream noise is never fatal; the loop just ends
                            debug!("Transport error: {}", e);
                            break;
                        }
                        None => {
                            info!("Stream ended");
                            break;
                        }
                        _ => {}
                    }
                }

                cmd = rx.recv() => {
                    match cmd {
                        Some(Command::Subscribe(request)) => {
                            match serde_json::to_string(&request) {
                                Ok(json) => {
                                    debug!("Subscribing: {}", json);
                                    if write.send(Message::Text(json.into())).await.is_err() {
                                        break;
                                    }
                                }
                                Err(e) => warn!("Failed to encode subscribe frame: {}", e),
                            }
                        }
                        Some(Command::Close) | None => {
                            info!("Closing connection");
                            break;
                        }
                    }
                }

                _ = ticker.tick() => {
                    if let Some(deadline) = deadline {
                        if Instant::now() >= deadline {
                            info!("Deadline reached, closing connection");
                            break;
                        }
                    }
                }
            }
        }

        let _ = write.send(Message::Close(None)).await;
        Ok(())
    }

    /// Dispatch one inbound text frame.
    ///
    /// Acks append their subscription id to the confirmed list and invoke the
    /// ack handler; events invoke the event handler with the `data` payload
    /// and are dropped when it is absent. Everything else (empty frames,
    /// unknown types, JSON that fails to parse) is silently ignored.
    fn handle_frame(&mut self, raw: &str) {
        if raw.trim().is_empty() {
            return;
        }

        let frame = match serde_json::from_str::<InboundFrame>(raw) {
            Ok(frame) => frame,
            Err(_) => return,
        };

        match frame {
            InboundFrame::Ack { subscription_id } => {
                if let Some(sid) = &subscription_id {
                    self.subscription_ids.push(sid.clone());
                }
                if let Some(handler) = &self.on_ack {
                    handler(subscription_id);
                }
            }
            InboundFrame::Event { data } => {
                let Some(data) = data.filter(|d| !d.is_null()) else {
                    return;
                };
                if let Some(handler) = &self.on_event {
                    handler(data);
                }
            }
            InboundFrame::Other => {}
        }
    }
}

impl std::fmt::Debug for DomeWebSocket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomeWebSocket")
            .field("ws_url", &self.ws_url)
            .field("subscriptions", &self.subscription_ids.len())
            .finish()
    }
}
