use super::*;

/// Active toasts in display order. Never edited in place: every change
/// produces a new list.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Default)]
pub struct ToastList {
    toasts: Vec<Toast>,
}

impl ToastList {
    pub fn new() -> Self {
        Self {
            toasts: Vec::new(),
        }
    }

    /// New list with `toast` added at the end
    pub fn appended(&self, toast: Toast) -> Self {
        let mut toasts = Vec::with_capacity(self.toasts.len() + 1);
        toasts.extend(self.toasts.iter().cloned());
        toasts.push(toast);

        Self { toasts }
    }

    /// New list with every entry except the one carrying `id`
    pub fn without(&self, id: &ToastId) -> Self {
        Self {
            toasts: self.toasts.iter()
                .filter(|t| &t.id != id)
                .cloned()
                .collect(),
        }
    }

    pub fn contains(&self, id: &ToastId) -> bool {
        self.toasts.iter().any(|t| &t.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.toasts.iter().map(|t| t.message.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a ToastList {
    type Item = &'a Toast;
    type IntoIter = std::slice::Iter<'a, Toast>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
