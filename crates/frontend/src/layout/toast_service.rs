use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Lifetime of a toast before it dismisses itself.
pub const TOAST_LIFETIME_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Danger,
    Success,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Danger => "toast toast--danger",
            ToastKind::Success => "toast toast--success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

/// Visible toasts, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Transient notifications shown above every page.
#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn show(&self, kind: ToastKind, text: impl Into<String>) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, text));

        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            queue.try_update(|q| q.dismiss(id));
        });
    }

    pub fn danger(&self, text: impl Into<String>) {
        self.show(ToastKind::Danger, text);
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(ToastKind::Success, text);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Renders the toast stack; mount once at the application root.
#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.queue.with(|q| q.items().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.kind.class()
                            role="status"
                            on:click=move |_| toasts.dismiss(id)
                        >
                            {toast.text}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Danger, "Data final precisa ser maior que inicial!");
        let b = queue.push(ToastKind::Success, "Imagem salva.");
        assert!(b > a);
        assert_eq!(queue.items().len(), 2);
        assert_eq!(queue.items()[0].kind, ToastKind::Danger);
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "ok");
        let b = queue.push(ToastKind::Danger, "erro");
        queue.dismiss(a);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, b);
        queue.dismiss(a);
        assert_eq!(queue.items().len(), 1);
        queue.dismiss(b);
        assert!(queue.is_empty());
    }
}
