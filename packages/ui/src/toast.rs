use dioxus::prelude::*;
use std::time::Duration;

/// How long a toast stays on screen before it dismisses itself.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Info,
    Success,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Error => "toast toast_error",
            NoticeKind::Info => "toast toast_info",
            NoticeKind::Success => "toast toast_success",
        }
    }
}

/// Something to tell the visitor. Title and body are translation keys, so a
/// toast on screen follows language changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub body: Option<&'static str>,
}

impl Notice {
    pub fn success(title: &'static str, body: &'static str) -> Self {
        Self {
            kind: NoticeKind::Success,
            title,
            body: Some(body),
        }
    }

    pub fn error(title: &'static str, body: &'static str) -> Self {
        Self {
            kind: NoticeKind::Error,
            title,
            body: Some(body),
        }
    }
}

#[derive(Clone, PartialEq)]
struct Toast {
    id: u64,
    notice: Notice,
}

#[derive(Clone, Copy)]
pub struct Toasts {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn notify(&self, notice: Notice) -> u64 {
        let mut next_id = self.next_id;
        let id = (next_id)();
        next_id.set(id + 1);

        let mut toasts = self.toasts;
        toasts.with_mut(|items| items.push(Toast { id, notice }));

        let this = *self;
        spawn(async move {
            gloo_timers::future::sleep(TOAST_LIFETIME).await;
            this.dismiss(id);
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.with_mut(|items| items.retain(|toast| toast.id != id));
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Vec::new);
    let next_id = use_signal(|| 1_u64);
    let ctx = Toasts { toasts, next_id };
    use_context_provider(|| ctx);

    rsx! {
        {children}
        ToastViewport { toasts: ctx }
    }
}

#[component]
fn ToastViewport(toasts: Toasts) -> Element {
    let lang = crate::use_lang()();
    let items = (toasts.toasts)();
    rsx! {
        div { class: "toast_region", role: "status", "aria-live": "polite",
            for toast in items.iter() {
                div {
                    key: "{toast.id}",
                    class: toast.notice.kind.class(),
                    div { class: "toast_content",
                        div { class: "toast_title", {crate::t(lang, toast.notice.title)} }
                        if let Some(body) = toast.notice.body {
                            div { class: "toast_body", {crate::t(lang, body)} }
                        }
                    }
                    button {
                        class: "toast_close",
                        onclick: {
                            let id = toast.id;
                            move |_| toasts.dismiss(id)
                        },
                        {crate::t(lang, "toast.dismiss")}
                    }
                }
            }
        }
    }
}

impl PartialEq for Toasts {
    fn eq(&self, other: &Self) -> bool {
        self.toasts == other.toasts && self.next_id == other.next_id
    }
}
