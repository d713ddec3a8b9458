use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::systems::fps_tracking::smoothed_fps;
use crate::interaction::filter::{
    RegionChoice, RegionFilter, RegionSelectionEvent, RegionSelectionSource,
};
use crate::interaction::selection::Selection;
use crate::market::{Catalog, ItemDetails, ItemId, top_deals};
use bevy::diagnostic::DiagnosticsStore;
use bevy::prelude::*;
use constants::pricing::TOP_DEALS_COUNT;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC 2.0 error object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Resource managing bidirectional RPC communication between the web frontend and Bevy.
/// Handles both request-response patterns and notification broadcasting.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the frontend without expecting response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Queue response for transmission to the frontend.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }

    #[cfg(test)]
    pub fn pending_notification_methods(&self) -> Vec<&str> {
        self.outgoing_notifications
            .iter()
            .map(|n| n.method.as_str())
            .collect()
    }

    #[cfg(test)]
    pub fn pending_notifications(&self) -> &[RpcNotification] {
        &self.outgoing_notifications
    }
}

/// Plugin establishing WebRPC communication layer for iframe-based deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    super::notifications::broadcast_interaction_changes,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    // Thread-safe message queue shared with the JS callback.
    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        if let Err(e) =
            window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
        {
            error!("Failed to register message listener: {:?}", e);
        }
    }

    // Hand the closure to JS so it outlives this system.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Event representing incoming RPC message from the frontend.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

/// Read-only scene state a request can query.
pub struct RpcContext<'a> {
    pub catalog: &'a Catalog,
    pub selection: &'a Selection,
    pub region: RegionChoice,
    pub leaderboard_size: usize,
    pub fps: f32,
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Res<DiagnosticsStore>,
    catalog: Res<Catalog>,
    selection: Res<Selection>,
    region_filter: Res<RegionFilter>,
    config: Option<Res<SceneConfig>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut region_events: EventWriter<RegionSelectionEvent>,
) {
    let context = RpcContext {
        catalog: &catalog,
        selection: &selection,
        region: region_filter.active(),
        leaderboard_size: config.map_or(TOP_DEALS_COUNT, |c| c.leaderboard_size),
        fps: smoothed_fps(&diagnostics).unwrap_or(0.0) as f32,
    };

    for event in events.read() {
        debug!("Received RPC: {}", event.content);

        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                let mut region_requests = Vec::new();
                if let Some(response) =
                    handle_rpc_request(&request, &context, &mut region_requests)
                {
                    rpc_interface.queue_response(response);
                }
                for region in region_requests {
                    region_events.write(RegionSelectionEvent {
                        region,
                        source: RegionSelectionSource::Rpc,
                    });
                }
            }
            Err(parse_error) => {
                warn!("Discarding malformed RPC message: {}", parse_error);
            }
        }
    }
}

/// Handle individual RPC request and generate response based on method.
///
/// Region changes are not applied here; they are pushed onto `region_requests`
/// and go through the same event path as the keyboard shortcuts.
pub fn handle_rpc_request(
    request: &RpcRequest,
    context: &RpcContext,
    region_requests: &mut Vec<RegionChoice>,
) -> Option<RpcResponse> {
    // Only generate responses for requests with IDs (notifications have no ID).
    let id = request.id.clone()?;

    let result = match request.method.as_str() {
        "get_top_deals" => handle_get_top_deals(&request.params, context),
        "get_item_details" => handle_get_item_details(&request.params, context),
        "get_selection" => handle_get_selection(context),
        "set_region" => handle_set_region(&request.params, region_requests),
        "get_region" => Ok(serde_json::json!({ "region": context.region })),
        "get_fps" => Ok(serde_json::json!({ "fps": context.fps })),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            return Some(create_error_response(
                id,
                -32601,
                "Method not found",
                Some(serde_json::json!({"method": request.method})),
            ));
        }
    };

    match result {
        Ok(result_value) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        }),
        Err(error) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        }),
    }
}

fn handle_get_top_deals(
    params: &serde_json::Value,
    context: &RpcContext,
) -> Result<serde_json::Value, RpcError> {
    #[derive(Deserialize, Default)]
    struct TopDealsParams {
        limit: Option<usize>,
    }

    let parsed = if params.is_null() {
        TopDealsParams::default()
    } else {
        serde_json::from_value::<TopDealsParams>(params.clone())
            .map_err(|_| RpcError::invalid_params("Expected optional 'limit' parameter"))?
    };

    let limit = parsed.limit.unwrap_or(context.leaderboard_size);
    Ok(serde_json::json!({
        "top_deals": top_deals(context.catalog.items(), limit)
    }))
}

fn handle_get_item_details(
    params: &serde_json::Value,
    context: &RpcContext,
) -> Result<serde_json::Value, RpcError> {
    #[derive(Deserialize)]
    struct ItemParams {
        id: u32,
    }

    let parsed = serde_json::from_value::<ItemParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'id' parameter"))?;

    let item = context
        .catalog
        .get(ItemId(parsed.id))
        .ok_or_else(|| RpcError::invalid_params(&format!("Unknown item id: {}", parsed.id)))?;

    serde_json::to_value(ItemDetails::of(item))
        .map_err(|e| RpcError::internal_error(&e.to_string()))
}

fn handle_get_selection(context: &RpcContext) -> Result<serde_json::Value, RpcError> {
    let selected = context
        .selection
        .current()
        .and_then(|id| context.catalog.get(id))
        .map(ItemDetails::of);

    Ok(serde_json::json!({ "selected": selected }))
}

fn handle_set_region(
    params: &serde_json::Value,
    region_requests: &mut Vec<RegionChoice>,
) -> Result<serde_json::Value, RpcError> {
    #[derive(Deserialize)]
    struct RegionParams {
        region: String,
    }

    let parsed = serde_json::from_value::<RegionParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'region' parameter"))?;

    let region = RegionChoice::from_code(&parsed.region)
        .ok_or_else(|| RpcError::invalid_params(&format!("Unknown region: {}", parsed.region)))?;

    region_requests.push(region);

    Ok(serde_json::json!({
        "success": true,
        "region": region
    }))
}

/// Create standardized error response with optional data payload.
fn create_error_response(
    id: serde_json::Value,
    code: i32,
    message: &str,
    data: Option<serde_json::Value>,
) -> RpcResponse {
    RpcResponse {
        jsonrpc: "2.0".to_string(),
        result: None,
        error: Some(RpcError {
            code,
            message: message.to_string(),
            data,
        }),
        id: Some(id),
    }
}

/// Send queued notifications and responses to the frontend.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    // Send notifications first.
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    // Send responses second to maintain order.
    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to parent window (web frontend).
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // Native builds have no frontend to talk to.
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self {
            code: -32603,
            message: message.to_string(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(method: &str, params: serde_json::Value) -> RpcRequest {
        RpcRequest {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
            id: Some(json!(1)),
        }
    }

    fn call(
        method: &str,
        params: serde_json::Value,
        selection: &Selection,
    ) -> (RpcResponse, Vec<RegionChoice>) {
        let catalog = Catalog::builtin();
        let context = RpcContext {
            catalog: &catalog,
            selection,
            region: RegionChoice::All,
            leaderboard_size: 5,
            fps: 60.0,
        };
        let mut region_requests = Vec::new();
        let response = handle_rpc_request(&request(method, params), &context, &mut region_requests)
            .expect("requests with an id get a response");
        (response, region_requests)
    }

    #[test]
    fn notifications_without_id_get_no_response() {
        let catalog = Catalog::builtin();
        let selection = Selection::default();
        let context = RpcContext {
            catalog: &catalog,
            selection: &selection,
            region: RegionChoice::All,
            leaderboard_size: 5,
            fps: 0.0,
        };
        let mut request = request("get_fps", json!(null));
        request.id = None;
        assert!(handle_rpc_request(&request, &context, &mut Vec::new()).is_none());
    }

    #[test]
    fn unknown_methods_are_rejected() {
        let (response, _) = call("do_something", json!({}), &Selection::default());
        let error = response.error.unwrap();
        assert_eq!(error.code, -32601);
        assert_eq!(error.data, Some(json!({"method": "do_something"})));
    }

    #[test]
    fn top_deals_default_to_leaderboard_size() {
        let (response, _) = call("get_top_deals", json!(null), &Selection::default());
        let deals = &response.result.unwrap()["top_deals"];
        assert_eq!(deals.as_array().unwrap().len(), 5);
        assert_eq!(deals[0]["rank"], json!(1));
        assert_eq!(deals[0]["name"], json!("Pokemon Gold"));
    }

    #[test]
    fn top_deals_respect_explicit_limit() {
        let (response, _) = call("get_top_deals", json!({"limit": 2}), &Selection::default());
        assert_eq!(response.result.unwrap()["top_deals"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn item_details_match_the_shared_metrics() {
        let (response, _) = call("get_item_details", json!({"id": 6}), &Selection::default());
        let details = response.result.unwrap();
        assert_eq!(details["metrics"]["savings"], json!(170.0));
        assert_eq!(details["ring"], json!("moderate"));
    }

    #[test]
    fn unknown_item_is_invalid_params() {
        let (response, _) = call("get_item_details", json!({"id": 99}), &Selection::default());
        let error = response.error.unwrap();
        assert_eq!(error.code, -32602);
        assert_eq!(error.message, "Unknown item id: 99");
    }

    #[test]
    fn selection_reports_details_or_null() {
        let (response, _) = call("get_selection", json!(null), &Selection::default());
        assert_eq!(response.result.unwrap(), json!({"selected": null}));

        let mut selection = Selection::default();
        selection.select(ItemId(3));
        let (response, _) = call("get_selection", json!(null), &selection);
        assert_eq!(response.result.unwrap()["selected"]["id"], json!(3));
    }

    #[test]
    fn set_region_queues_a_request() {
        let (response, requests) = call("set_region", json!({"region": "eu"}), &Selection::default());
        assert_eq!(requests, vec![RegionChoice::Eu]);
        assert_eq!(response.result.unwrap()["region"], json!("EU"));

        let (response, requests) = call("set_region", json!({"region": "MARS"}), &Selection::default());
        assert!(requests.is_empty());
        assert_eq!(response.error.unwrap().code, -32602);
    }

    #[test]
    fn get_region_and_fps_echo_context() {
        let (response, _) = call("get_region", json!(null), &Selection::default());
        assert_eq!(response.result.unwrap(), json!({"region": "ALL"}));

        let (response, _) = call("get_fps", json!(null), &Selection::default());
        assert_eq!(response.result.unwrap(), json!({"fps": 60.0}));
    }

    #[test]
    fn params_may_be_omitted_on_the_wire() {
        let parsed: RpcRequest =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"get_selection","id":7}"#).unwrap();
        assert!(parsed.params.is_null());
        assert_eq!(parsed.id, Some(json!(7)));
    }
}
