// services/web-dash/src/pages/chatbot.rs
//
// Stock-assistant chat
//

use leptos::*;

use apikit::types::ChatRequest;

use crate::auth::use_client;
use crate::pages::load;

#[derive(Debug, Clone)]
struct ChatLine {
    from_user: bool,
    text: String,
}

#[component]
pub fn ChatbotPage() -> impl IntoView {
    let client = use_client();

    let history = create_rw_signal(Vec::<ChatLine>::new());
    let draft = create_rw_signal(String::new());
    let session_id = create_rw_signal(None::<String>);
    let suggestions = create_rw_signal(None::<Vec<String>>);
    let page_error = create_rw_signal(None::<String>);
    let busy = create_rw_signal(false);

    {
        let c = client.clone();
        load(suggestions, page_error, async move {
            c.chat_suggestions().await.map(|s| s.suggestions)
        });
    }

    let send = {
        let client = client.clone();
        move || {
            let message = draft.get_untracked();
            if message.is_empty() || busy.get_untracked() {
                return;
            }
            draft.set(String::new());
            history.update(|lines| {
                lines.push(ChatLine {
                    from_user: true,
                    text: message.clone(),
                })
            });

            let request = ChatRequest {
                message,
                session_id: session_id.get_untracked(),
            };
            let client = client.clone();
            busy.set(true);
            spawn_local(async move {
                match client.chat(&request).await {
                    Ok(reply) => {
                        session_id.set(Some(reply.session_id.clone()));
                        history.update(|lines| {
                            lines.push(ChatLine {
                                from_user: false,
                                text: reply.response,
                            })
                        });
                        if let Some(actions) = reply.suggested_actions {
                            if !actions.is_empty() {
                                suggestions.set(Some(actions));
                            }
                        }
                    }
                    Err(err) => {
                        page_error.set(Some(err.to_string()));
                    }
                }
                busy.set(false);
            });
        }
    };

    let submit = {
        let send = send.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            send();
        }
    };

    let suggestion_chips = move || suggestions.get().unwrap_or_default();

    view! {
        <div class="page chatbot-page">
            <div class="page-header">
                <h1 class="page-title">"Assistant"</h1>
            </div>

            <section class="panel chat-panel">
                <div class="chat-history">
                    <For
                        each=move || {
                            history.get().into_iter().enumerate().collect::<Vec<_>>()
                        }
                        key=|(i, _)| *i
                        children=|(_, line)| {
                            let class = if line.from_user {
                                "chat-line chat-user"
                            } else {
                                "chat-line chat-bot"
                            };
                            view! { <div class=class>{line.text.clone()}</div> }
                        }
                    />
                </div>

                {move || {
                    page_error
                        .get()
                        .map(|message| view! { <p class="form-error">{message}</p> })
                }}

                <div class="chat-suggestions">
                    <For
                        each=suggestion_chips
                        key=|text| text.clone()
                        children=move |text| {
                            let fill = text.clone();
                            view! {
                                <button class="chip" on:click=move |_| draft.set(fill.clone())>
                                    {text.clone()}
                                </button>
                            }
                        }
                    />
                </div>

                <form class="chat-input" on:submit=submit>
                    <input
                        type="text"
                        placeholder="Do we have Azithromycin 500 in stock?"
                        prop:value=draft
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    />
                    <button class="btn btn-primary" type="submit" disabled=move || busy.get()>
                        "Send"
                    </button>
                </form>
            </section>
        </div>
    }
}
