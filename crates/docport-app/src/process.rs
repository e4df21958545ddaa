//! Message processing
//!
//! Runs a message through the TEA update function, following any
//! follow-up messages until the chain settles.

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Upper bound on follow-up messages for one input event
const MAX_FOLLOW_UPS: usize = 16;

/// Process a message through the TEA update function
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    let mut steps = 0;
    while let Some(m) = msg {
        if steps == MAX_FOLLOW_UPS {
            tracing::warn!("Dropping follow-up message after {} steps: {:?}", steps, m);
            break;
        }
        msg = handler::update(state, m).message;
        steps += 1;
    }
}
