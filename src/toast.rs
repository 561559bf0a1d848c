use std::time::Duration;

/// How long a toast stays on screen before dismissing itself.
pub const TOAST_LIFETIME: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<(u64, Toast)>,
}

impl ToastQueue {
    pub fn push(&mut self, toast: Toast) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push((id, toast));
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|(i, _)| *i != id);
        self.toasts.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &(u64, Toast)> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = ToastQueue::default();
        let a = queue.push(Toast::success("a", "first"));
        let b = queue.push(Toast::error("b", "second"));
        assert_ne!(a, b);
        assert_eq!(queue.len(), 2);

        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        let remaining = queue.iter().map(|(_, t)| t.title.as_str()).collect::<Vec<_>>();
        assert_eq!(remaining, vec!["b"]);

        assert!(queue.dismiss(b));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut queue = ToastQueue::default();
        let a = queue.push(Toast::success("a", ""));
        queue.dismiss(a);
        let b = queue.push(Toast::success("b", ""));
        assert!(b > a);
    }
}
