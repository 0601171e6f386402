//! TSDB connector over the websocket query/stmt2 protocol.
//!
//! Control messages are JSON (`conn`, `query`, `stmt2_init`,
//! `stmt2_prepare`, `stmt2_exec`); bind data travels in one binary frame
//! of `[req_id u64][stmt_id u64][action u64]` followed by the serialized
//! bind body (see [`crate::bindv`]).

use std::net::TcpStream;

use serde_json::json;
use tungstenite::stream::MaybeTlsStream;
use tungstenite::{Message as WsMessage, WebSocket};

use crate::bindv;
use crate::connector::{SinkConnector, StmtExec};
use crate::error::{SinkError, truncate_sql};
use crate::target::TdengineTarget;

/// Binary frame action code for stmt2 bind data.
const ACTION_STMT2_BIND: u64 = 9;

/// One websocket connection to the TSDB.
pub struct WsConnector {
    config: TdengineTarget,
    socket: Option<WebSocket<MaybeTlsStream<TcpStream>>>,
    req_id: u64,
    stmt_id: Option<u64>,
    prepared_sql: Option<String>,
    valid: bool,
}

impl WsConnector {
    /// Create unconnected.
    #[must_use]
    pub fn new(config: TdengineTarget) -> Self {
        Self { config, socket: None, req_id: 0, stmt_id: None, prepared_sql: None, valid: false }
    }

    fn next_req_id(&mut self) -> u64 {
        self.req_id += 1;
        self.req_id
    }

    /// Send a JSON action and wait for its response object.
    fn request(
        &mut self,
        action: &str,
        mut args: serde_json::Value,
        context: &str,
    ) -> Result<serde_json::Value, SinkError> {
        let req_id = self.next_req_id();
        if let Some(map) = args.as_object_mut() {
            map.insert("req_id".to_owned(), json!(req_id));
        }
        let endpoint = self.config.endpoint();
        let socket = self
            .socket
            .as_mut()
            .ok_or_else(|| SinkError::Connect { endpoint, reason: "not connected".to_owned() })?;

        let frame = json!({ "action": action, "args": args });
        if let Err(e) = socket.send(WsMessage::Text(frame.to_string())) {
            self.valid = false;
            return Err(e.into());
        }
        loop {
            let message = match socket.read() {
                Ok(message) => message,
                Err(e) => {
                    self.valid = false;
                    return Err(e.into());
                }
            };
            match message {
                WsMessage::Text(text) => {
                    let response: serde_json::Value = serde_json::from_str(&text)
                        .map_err(|e| SinkError::Protocol(format!("bad response: {e}")))?;
                    let code = response["code"].as_i64().unwrap_or(-1);
                    if code != 0 {
                        return Err(SinkError::Execute {
                            code: code as i32,
                            message: response["message"]
                                .as_str()
                                .unwrap_or("unknown error")
                                .to_owned(),
                            sql: truncate_sql(context),
                        });
                    }
                    return Ok(response);
                }
                WsMessage::Ping(payload) => {
                    let _ = socket.send(WsMessage::Pong(payload));
                }
                WsMessage::Close(_) => {
                    self.valid = false;
                    return Err(SinkError::Protocol("connection closed by sink".to_owned()));
                }
                _ => continue,
            }
        }
    }

    fn send_binary(&mut self, frame: Vec<u8>) -> Result<(), SinkError> {
        let endpoint = self.config.endpoint();
        let socket = self
            .socket
            .as_mut()
            .ok_or_else(|| SinkError::Connect { endpoint, reason: "not connected".to_owned() })?;
        if let Err(e) = socket.send(WsMessage::Binary(frame)) {
            self.valid = false;
            return Err(e.into());
        }
        Ok(())
    }

    fn stmt_init(&mut self) -> Result<u64, SinkError> {
        let response = self.request("stmt2_init", json!({}), "stmt2_init")?;
        response["stmt_id"]
            .as_u64()
            .ok_or_else(|| SinkError::Protocol("stmt2_init returned no stmt_id".to_owned()))
    }
}

impl SinkConnector for WsConnector {
    fn connect(&mut self) -> Result<(), SinkError> {
        let url = self.config.ws_url();
        let (socket, _response) =
            tungstenite::connect(url.as_str()).map_err(|e| SinkError::Connect {
            endpoint: self.config.endpoint(),
            reason: e.to_string(),
        })?;
        self.socket = Some(socket);
        self.valid = true;

        let args = json!({
            "user": self.config.user,
            "password": self.config.password,
            "db": self.config.database,
        });
        self.request("conn", args, "conn")?;
        tracing::debug!(endpoint = %self.config.endpoint(), "tsdb websocket connected");
        Ok(())
    }

    fn prepare(&mut self, sql: &str) -> Result<(), SinkError> {
        if self.prepared_sql.as_deref() == Some(sql) {
            return Ok(());
        }
        let stmt_id = match self.stmt_id {
            Some(id) => id,
            None => {
                let id = self.stmt_init()?;
                self.stmt_id = Some(id);
                id
            }
        };
        self.request("stmt2_prepare", json!({ "stmt_id": stmt_id, "sql": sql }), sql)?;
        self.prepared_sql = Some(sql.to_owned());
        Ok(())
    }

    fn execute_sql(&mut self, sql: &str) -> Result<(), SinkError> {
        self.request("query", json!({ "sql": sql }), sql)?;
        Ok(())
    }

    fn execute_stmt(&mut self, exec: &StmtExec<'_>) -> Result<(), SinkError> {
        let stmt_id = self
            .stmt_id
            .ok_or_else(|| SinkError::Protocol("execute_stmt before prepare".to_owned()))?;

        let body = bindv::serialize(exec)?;
        let mut frame = Vec::with_capacity(24 + body.len());
        frame.extend_from_slice(&self.next_req_id().to_le_bytes());
        frame.extend_from_slice(&stmt_id.to_le_bytes());
        frame.extend_from_slice(&ACTION_STMT2_BIND.to_le_bytes());
        frame.extend_from_slice(&body);
        self.send_binary(frame)?;

        self.request("stmt2_exec", json!({ "stmt_id": stmt_id }), "stmt2_exec")?;
        Ok(())
    }

    fn close(&mut self) {
        if let Some(mut socket) = self.socket.take() {
            let _ = socket.close(None);
        }
        self.valid = false;
        self.stmt_id = None;
        self.prepared_sql = None;
    }

    fn is_valid(&self) -> bool {
        self.valid && self.socket.is_some()
    }

    fn reset_state(&mut self) {
        // The prepared statement survives; only per-batch state clears.
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unconnected_is_invalid() {
        let conn = WsConnector::new(TdengineTarget::default());
        assert!(!conn.is_valid());
    }

    #[test]
    fn test_request_without_socket_fails() {
        let mut conn = WsConnector::new(TdengineTarget::default());
        assert!(matches!(
            conn.execute_sql("SELECT 1"),
            Err(SinkError::Connect { .. })
        ));
    }

    #[test]
    fn test_connect_refused_is_connect_error() {
        // Nothing listens on this port.
        let mut conn = WsConnector::new(TdengineTarget {
            host: "127.0.0.1".to_owned(),
            port: 1,
            ..TdengineTarget::default()
        });
        assert!(matches!(conn.connect(), Err(SinkError::Connect { .. })));
    }
}
