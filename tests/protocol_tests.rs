//! Wire-contract tests: a whole session driven through serialized requests,
//! the way a transport layer would deliver them.

use gandalf_engine::{ActionRequest, ActionResponse, RoundEngine};

fn submit(round: &mut RoundEngine, json: &str) -> serde_json::Value {
    let request: ActionRequest = serde_json::from_str(json).expect("request must parse");
    let response = round.handle(request);
    serde_json::to_value(&response).expect("response must serialize")
}

#[test]
fn test_json_driven_session() {
    let mut round = RoundEngine::seeded(42);

    let reply = submit(&mut round, r#"{"action": "create_player", "name": "Alice"}"#);
    assert_eq!(reply["status"], "player_added");

    let reply = submit(&mut round, r#"{"action": "join", "name": "Bob", "is_bot": true}"#);
    assert_eq!(reply["status"], "player_added");
    assert_eq!(reply["players"][1]["is_bot"], true);

    let reply = submit(&mut round, r#"{"action": "start_game"}"#);
    assert_eq!(reply["status"], "game_started");
    assert_eq!(reply["started"], true);
    assert_eq!(reply["turn"], "Alice");
    assert!(reply["top_discard"].is_string());

    // Drawing out of turn is rejected and mutates nothing
    let reply = submit(&mut round, r#"{"action": "draw", "player": "Bob"}"#);
    assert_eq!(reply["error"], "Not your turn");
    assert!(reply.get("status").is_none());

    let reply = submit(&mut round, r#"{"action": "draw", "player": "Alice"}"#);
    assert_eq!(reply["status"], "drawn");
    let drawn = reply["card"].as_str().unwrap().to_string();

    let reply = submit(&mut round, r#"{"action": "swap", "player": "Alice", "index": 1}"#);
    assert_eq!(reply["status"], "swapped");
    // The swapped-out card is now the top discard
    assert_eq!(reply["card"], reply["top_discard"]);
    // And the swapped-in card shows in Alice's own row
    assert_eq!(reply["players"][0]["bench"][1], drawn.as_str());

    let reply = submit(&mut round, r#"{"action": "peek", "player": "Bob", "index": 0}"#);
    assert!(reply["status"].as_str().unwrap().starts_with("peeked"));
    let peeked = reply["card"].as_str().unwrap().to_string();
    assert_eq!(reply["players"][1]["bench"][0], peeked.as_str());

    // Alice's next projection still masks Bob's peeked slot
    let reply = submit(&mut round, r#"{"action": "get_state", "player": "Alice"}"#);
    assert_eq!(reply["players"][1]["bench"][0], "?");

    let reply = submit(&mut round, r#"{"action": "end_round", "player": "Bob"}"#);
    assert!(reply["status"].as_str().unwrap().starts_with("gandalf_called"));
    assert_eq!(reply["started"], false);
    assert_eq!(reply["players"].as_array().unwrap().len(), 0);
}

#[test]
fn test_unknown_action_fails_to_parse() {
    let result: Result<ActionRequest, _> =
        serde_json::from_str(r#"{"action": "teleport", "player": "Alice"}"#);
    assert!(result.is_err());
}

#[test]
fn test_error_responses_round_trip() {
    let mut round = RoundEngine::seeded(1);
    let response = round.handle(ActionRequest::StartGame);

    let json = serde_json::to_string(&response).unwrap();
    let parsed: ActionResponse = serde_json::from_str(&json).unwrap();

    assert_eq!(
        parsed.error.as_deref(),
        Some("Need at least 2 players to start")
    );
    assert!(parsed.status.is_none());
    assert!(!parsed.state.started);
}

#[test]
fn test_gandalf_alias_parses() {
    let request: ActionRequest =
        serde_json::from_str(r#"{"action": "gandalf", "player": "Alice"}"#).unwrap();
    assert_eq!(
        request,
        ActionRequest::EndRound {
            player: "Alice".to_string()
        }
    );
}
