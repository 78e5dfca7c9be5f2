use crate::audio::{self, AudioGraph, BufferSession};
use crate::dom;
use audiosphere_core::{LoadOutcome, SessionManager};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub type Sessions = Rc<RefCell<SessionManager<BufferSession>>>;

/// Read, decode and start `file`, superseding whatever is playing.
///
/// The frame loop keeps running while this is suspended; the old session
/// plays on until the new buffer has decoded.
pub async fn load_file(graph: AudioGraph, sessions: Sessions, file: web::File) {
    let name = file.name();
    let ticket = sessions.borrow_mut().begin_load();
    log::info!("[audio] load #{} '{}' ({} bytes)", ticket.id(), name, file.size());

    let started = Instant::now();
    let decoded = match audio::read_file(&file).await {
        Ok(bytes) => graph.decode(&bytes).await,
        Err(e) => Err(e),
    };
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    let outcome = sessions
        .borrow_mut()
        .complete(ticket, decoded, |buffer| graph.start_session(&buffer));
    match outcome {
        LoadOutcome::Activated { replaced } => {
            let duration = sessions
                .borrow()
                .active()
                .map(|s| s.duration_sec)
                .unwrap_or_default();
            log::info!(
                "[audio] playing '{}' duration={:.1}s decoded_in={:.0}ms replaced={}",
                name,
                duration,
                elapsed_ms,
                replaced
            );
        }
        LoadOutcome::Failed(err) => {
            log::error!("[audio] '{}': {}", name, err);
            dom::alert(err.user_message());
        }
        LoadOutcome::Superseded => {
            log::info!("[audio] '{}' superseded by a newer selection", name);
        }
    }
}
