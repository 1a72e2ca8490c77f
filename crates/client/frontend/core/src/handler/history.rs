use super::{Dispatch, EventHandler};
use crate::bindings;
use crate::input::{InputEvent, Key};

/// Position in a snapshot of the message log.
///
/// Scrolling wraps around only when pushing past an end the cursor already
/// sits on; every other step clamps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryCursor {
    log_length: usize,
    cursor: usize,
}

impl HistoryCursor {
    /// Starts on the newest message.
    pub fn new(log_length: usize) -> Self {
        Self {
            log_length,
            cursor: log_length.saturating_sub(1),
        }
    }

    pub fn log_length(&self) -> usize {
        self.log_length
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn last(&self) -> usize {
        self.log_length.saturating_sub(1)
    }

    pub fn scroll(&mut self, adjust: i32) {
        if self.log_length == 0 {
            return;
        }

        let last = self.last();
        self.cursor = if adjust < 0 && self.cursor == 0 {
            last
        } else if adjust > 0 && self.cursor == last {
            0
        } else {
            let target = self.cursor as i64 + i64::from(adjust);
            target.clamp(0, last as i64) as usize
        };
    }

    pub fn jump_to_first(&mut self) {
        self.cursor = 0;
    }

    pub fn jump_to_last(&mut self) {
        self.cursor = self.last();
    }
}

pub(super) fn dispatch(cursor: &mut HistoryCursor, event: &InputEvent) -> Dispatch {
    let InputEvent::KeyDown { key, .. } = *event else {
        return Dispatch::none();
    };

    if let Some(adjust) = bindings::history_scroll(key) {
        cursor.scroll(adjust);
        return Dispatch::none();
    }
    match key {
        Key::Home => cursor.jump_to_first(),
        Key::End => cursor.jump_to_last(),
        _ => return Dispatch::switch(EventHandler::MainGame),
    }
    Dispatch::none()
}
