/// Client-side navigation state: the current path plus a back stack.
///
/// `push` records the departing path so Back can return to it; `replace`
/// deliberately does not - redirects go through `replace`, so a bounced-from
/// path (an unauthorized admin page, a dead link) never reappears via Back.
#[derive(Clone, Debug)]
pub struct Router {
    current: String,
    back: Vec<String>,
}

impl Router {
    /// A router parked on the landing path.
    pub fn new() -> Self {
        Self {
            current: "/".to_string(),
            back: Vec::new(),
        }
    }

    /// The path currently mounted.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Navigate, stacking the departing path. Re-pushing the current path
    /// is a no-op.
    pub fn push(&mut self, path: &str) {
        if path == self.current {
            return;
        }
        log::debug!("navigate {} -> {path}", self.current);
        self.back
            .push(std::mem::replace(&mut self.current, path.to_string()));
    }

    /// Swap the current path without touching the back stack.
    pub fn replace(&mut self, path: &str) {
        self.current = path.to_string();
    }

    /// Pop back one entry; `false` if the stack is empty.
    pub fn back(&mut self) -> bool {
        match self.back.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Whether Back has anywhere to go.
    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_then_back() {
        let mut router = Router::new();
        router.push("/login");
        router.push("/admin/dashboard");
        assert_eq!(router.current(), "/admin/dashboard");

        assert!(router.back());
        assert_eq!(router.current(), "/login");
        assert!(router.back());
        assert_eq!(router.current(), "/");
        assert!(!router.back());
    }

    #[test]
    fn replace_leaves_no_trace() {
        let mut router = Router::new();
        router.push("/admin/secret");
        router.replace("/login");

        assert_eq!(router.current(), "/login");
        assert!(router.back());
        // Back skips the replaced entry entirely.
        assert_eq!(router.current(), "/");
    }

    #[test]
    fn pushing_the_current_path_is_a_no_op() {
        let mut router = Router::new();
        router.push("/");
        assert!(!router.can_go_back());
    }
}
