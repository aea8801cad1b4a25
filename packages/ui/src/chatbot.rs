//! Floating assistant with canned, keyword-matched answers.

use crate::i18n::Lang;
use dioxus::prelude::*;
use std::time::Duration;

const CHATBOT_CSS: Asset = asset!("/assets/styling/chatbot.css");

/// Pause before the assistant answers.
pub const REPLY_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatTopic {
    Greeting,
    Services,
    Laboratory,
    Training,
    Contact,
    Default,
}

impl ChatTopic {
    pub fn key(self) -> &'static str {
        match self {
            ChatTopic::Greeting => "chat.greeting",
            ChatTopic::Services => "chat.reply.services",
            ChatTopic::Laboratory => "chat.reply.laboratory",
            ChatTopic::Training => "chat.reply.training",
            ChatTopic::Contact => "chat.reply.contact",
            ChatTopic::Default => "chat.reply.default",
        }
    }
}

type Rule = (ChatTopic, &'static [&'static str]);

// Checked in order; the first rule with a matching keyword wins.
const FR_RULES: &[Rule] = &[
    (ChatTopic::Services, &["service", "offre"]),
    (ChatTopic::Laboratory, &["laboratoire", "laboratory", "analyse"]),
    (ChatTopic::Training, &["formation", "training", "cours"]),
    (ChatTopic::Contact, &["contact", "adresse", "téléphone"]),
];

const EN_RULES: &[Rule] = &[
    (ChatTopic::Services, &["service", "offer"]),
    (ChatTopic::Laboratory, &["laboratory", "laboratoire", "analys"]),
    (ChatTopic::Training, &["training", "formation", "course"]),
    (ChatTopic::Contact, &["contact", "address", "phone"]),
];

fn rules(lang: Lang) -> &'static [Rule] {
    match lang {
        Lang::Fr => FR_RULES,
        Lang::En => EN_RULES,
    }
}

/// Pick the canned answer for a visitor message.
pub fn classify(lang: Lang, text: &str) -> ChatTopic {
    let text = text.to_lowercase();
    rules(lang)
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| text.contains(kw)))
        .map(|(topic, _)| *topic)
        .unwrap_or(ChatTopic::Default)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    Assistant,
    Visitor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatBody {
    /// Rendered through the translation table when displayed.
    Canned(ChatTopic),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u32,
    pub author: Author,
    pub body: ChatBody,
}

impl ChatMessage {
    pub fn text(&self, lang: Lang) -> String {
        match &self.body {
            ChatBody::Canned(topic) => crate::t(lang, topic.key()),
            ChatBody::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl Default for ChatLog {
    fn default() -> Self {
        let mut log = Self {
            messages: Vec::new(),
        };
        log.push(Author::Assistant, ChatBody::Canned(ChatTopic::Greeting));
        log
    }
}

impl ChatLog {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    fn push(&mut self, author: Author, body: ChatBody) -> u32 {
        let id = self.messages.len() as u32 + 1;
        self.messages.push(ChatMessage { id, author, body });
        id
    }

    /// Append what the visitor typed and return the topic to answer with.
    /// Blank input is dropped.
    pub fn post_visitor(&mut self, lang: Lang, text: &str) -> Option<ChatTopic> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.push(Author::Visitor, ChatBody::Text(text.to_string()));
        Some(classify(lang, text))
    }

    pub fn post_reply(&mut self, topic: ChatTopic) -> u32 {
        self.push(Author::Assistant, ChatBody::Canned(topic))
    }
}

#[component]
pub fn Chatbot() -> Element {
    let lang = crate::use_lang()();
    let mut open = use_signal(|| false);
    let mut log = use_signal(ChatLog::default);
    let mut input = use_signal(String::new);

    let mut send = move || {
        let text = input();
        let Some(topic) = log.with_mut(|log| log.post_visitor(lang, &text)) else {
            return;
        };
        input.set(String::new());
        spawn(async move {
            gloo_timers::future::sleep(REPLY_DELAY).await;
            log.with_mut(|log| log.post_reply(topic));
        });
    };

    let messages = log.read().messages().to_vec();

    rsx! {
        document::Link { rel: "stylesheet", href: CHATBOT_CSS }

        button {
            class: "chat_launcher",
            "aria-label": crate::t(lang, "chat.open"),
            onclick: move |_| open.set(true),
            "💬"
        }

        if open() {
            div { class: "chat_window",
                div { class: "chat_header",
                    div {
                        div { class: "chat_title", {crate::t(lang, "chat.title")} }
                        div { class: "chat_status", {crate::t(lang, "chat.status")} }
                    }
                    button {
                        class: "chat_close",
                        "aria-label": crate::t(lang, "chat.close"),
                        onclick: move |_| open.set(false),
                        "×"
                    }
                }

                div { class: "chat_messages",
                    for message in messages.iter() {
                        div {
                            key: "{message.id}",
                            class: match message.author {
                                Author::Assistant => "chat_bubble chat_bubble_assistant",
                                Author::Visitor => "chat_bubble chat_bubble_visitor",
                            },
                            {message.text(lang)}
                        }
                    }
                }

                div { class: "chat_input",
                    input {
                        value: "{input}",
                        placeholder: crate::t(lang, "chat.placeholder"),
                        oninput: move |e| input.set(e.value()),
                        onkeydown: move |e| {
                            if e.key() == Key::Enter {
                                send();
                            }
                        },
                    }
                    button {
                        class: "btn primary",
                        onclick: move |_| send(),
                        {crate::t(lang, "chat.send")}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn french_laboratory_keyword() {
        assert_eq!(classify(Lang::Fr, "laboratoire"), ChatTopic::Laboratory);
        assert_eq!(classify(Lang::Fr, "Vous faites des ANALYSES ?"), ChatTopic::Laboratory);
    }

    #[test]
    fn unknown_text_gets_default_reply() {
        assert_eq!(classify(Lang::Fr, "xyz123"), ChatTopic::Default);
        assert_eq!(classify(Lang::En, "xyz123"), ChatTopic::Default);
    }

    #[test]
    fn first_matching_rule_wins() {
        // "service" comes before "formation" in the rule list.
        assert_eq!(classify(Lang::Fr, "service de formation"), ChatTopic::Services);
        assert_eq!(classify(Lang::En, "course contact"), ChatTopic::Training);
    }

    #[test]
    fn keywords_depend_on_language() {
        assert_eq!(classify(Lang::En, "what is your phone number"), ChatTopic::Contact);
        assert_eq!(classify(Lang::Fr, "what is your phone number"), ChatTopic::Default);
        assert_eq!(classify(Lang::Fr, "votre téléphone"), ChatTopic::Contact);
    }

    #[test]
    fn log_opens_with_greeting() {
        let log = ChatLog::default();
        assert_eq!(log.messages().len(), 1);
        assert_eq!(log.messages()[0].id, 1);
        assert_eq!(log.messages()[0].author, Author::Assistant);
        assert_eq!(log.messages()[0].body, ChatBody::Canned(ChatTopic::Greeting));
    }

    #[test]
    fn ids_increase_by_one_regardless_of_author() {
        let mut log = ChatLog::default();
        let topic = log.post_visitor(Lang::Fr, "  laboratoire  ").unwrap();
        log.post_reply(topic);
        log.post_visitor(Lang::Fr, "merci");
        log.post_visitor(Lang::Fr, "encore");

        let ids: Vec<u32> = log.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(log.messages()[1].body, ChatBody::Text("laboratoire".into()));
        assert_eq!(log.messages()[2].author, Author::Assistant);
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut log = ChatLog::default();
        assert_eq!(log.post_visitor(Lang::En, "   "), None);
        assert_eq!(log.messages().len(), 1);
    }

    #[test]
    fn canned_replies_follow_the_language() {
        let mut log = ChatLog::default();
        log.post_reply(ChatTopic::Default);
        let reply = &log.messages()[1];
        assert_ne!(reply.text(Lang::Fr), reply.text(Lang::En));
        assert_eq!(reply.text(Lang::En), crate::t(Lang::En, "chat.reply.default"));
    }
}
