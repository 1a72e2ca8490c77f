//! Player-facing message log.

use std::borrow::Cow;
use std::collections::VecDeque;

use crate::palette::Color;

/// One log entry. Repeats of the same text are folded into `count`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub plain_text: String,
    pub color: Color,
    pub count: u32,
}

impl Message {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            plain_text: text.into(),
            color,
            count: 1,
        }
    }

    /// Text as displayed, with a `(xN)` suffix once the message repeats.
    pub fn full_text(&self) -> Cow<'_, str> {
        if self.count > 1 {
            Cow::Owned(format!("{} (x{})", self.plain_text, self.count))
        } else {
            Cow::Borrowed(&self.plain_text)
        }
    }
}

/// Bounded, append-only history of messages, oldest first.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageLog {
    messages: VecDeque<Message>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            messages: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Adds a message, stacking it onto the previous one if the text matches.
    pub fn add_message(&mut self, text: impl Into<String>, color: Color) {
        let text = text.into();
        if let Some(last) = self.messages.back_mut()
            && last.plain_text == text
        {
            last.count += 1;
            return;
        }
        self.push(Message::new(text, color));
    }

    /// Adds a message as a new entry even if it repeats the previous one.
    pub fn add_message_unstacked(&mut self, text: impl Into<String>, color: Color) {
        self.push(Message::new(text, color));
    }

    fn push(&mut self, message: Message) {
        if self.messages.len() == self.capacity {
            self.messages.pop_front();
        }
        self.messages.push_back(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&Message> {
        self.messages.get(index)
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.back()
    }

    /// Messages from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Message> + ExactSizeIterator {
        self.messages.iter()
    }
}
