//! Transient toast notifications.

use std::collections::VecDeque;
use std::time::Duration;

pub const NOTICE_LIFETIME: Duration = Duration::from_secs(4);
pub const MAX_NOTICES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notices {
    items: VecDeque<Notice>,
    next_id: u64,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a notice and returns its id. The oldest notice is dropped once
    /// more than [`MAX_NOTICES`] are showing.
    pub fn push(
        &mut self,
        kind: NoticeKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push_back(Notice {
            id,
            kind,
            title: title.into(),
            description: description.into(),
        });
        while self.items.len() > MAX_NOTICES {
            self.items.pop_front();
        }
        id
    }

    /// Removes a notice; dismissing an id twice is harmless.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        before != self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
