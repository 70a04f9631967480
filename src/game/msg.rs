use serde::{Deserialize, Serialize};

#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize, Deserialize)]
pub enum MsgClass {
    Info,
    Action,
    Alert,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Log {
    pub messages: Vec<(String, MsgClass)>,
}

impl Log {
    pub const fn new() -> Self {
        Log {
            messages: Vec::new(),
        }
    }

    /// Return the most recent message, if any.
    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(|(msg, _)| msg.as_str())
    }
}

/// The message log can add text from any string collection.
pub trait MessageLog {
    fn add<T: Into<String>>(&mut self, message: T, class: MsgClass);
}

impl MessageLog for Log {
    /// Push a message into the log under two conditions:
    /// - either the log is empty
    /// - or the last message is not identical to the new message
    fn add<T: Into<String>>(&mut self, msg: T, class: MsgClass) {
        let msg_str = msg.into();
        if let Some(recent_msg) = self.messages.last() {
            if recent_msg.0.eq(&msg_str) {
                return;
            }
        }
        debug!("{}", msg_str);
        self.messages.push((msg_str, class));
    }
}
