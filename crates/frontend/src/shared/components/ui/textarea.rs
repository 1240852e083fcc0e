use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use web_sys::HtmlTextAreaElement;

const INDENT: &str = "  ";

/// Number of editor lines in `text`; a trailing newline opens a new line.
fn line_count(text: &str) -> usize {
    if text.is_empty() {
        0
    } else {
        text.split('\n').count()
    }
}

fn lines_label(count: usize) -> String {
    match count {
        1 => "1 line".to_string(),
        n => format!("{} lines", n),
    }
}

/// Многострочный редактор, связанный с сигналом.
///
/// Tab вставляет отступ вместо перехода фокуса, под полем выводится число строк.
#[component]
pub fn Textarea(
    #[prop(optional, into)] label: MaybeProp<String>,
    /// Текущее содержимое; пишется в DOM через `prop:value`
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional, into)] id: MaybeProp<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let editor_id = move || id.get().unwrap_or_default();
    let editor_class = move || match class.get() {
        Some(extra) => format!("form__textarea {}", extra),
        None => "form__textarea".to_string(),
    };

    let emit = move |text: String| {
        if let Some(handler) = on_input {
            handler.run(text);
        }
    };

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() != "Tab" || ev.shift_key() {
            return;
        }
        ev.prevent_default();
        let area = event_target::<HtmlTextAreaElement>(&ev);
        // Позиции курсора в UTF-16, как их отдаёт браузер
        let caret = area.selection_start().ok().flatten().unwrap_or(0);
        if area.set_range_text(INDENT).is_err() {
            return;
        }
        let after = caret + INDENT.len() as u32;
        let _ = area.set_selection_start(Some(after));
        let _ = area.set_selection_end(Some(after));
        emit(area.value());
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|text| view! {
                <label class="form__label" for=editor_id>{text}</label>
            })}
            <textarea
                id=editor_id
                class=editor_class
                rows=rows.unwrap_or(3)
                spellcheck="false"
                prop:value=move || value.get()
                on:input=move |ev| emit(event_target_value(&ev))
                on:keydown=on_keydown
            ></textarea>
            <span class="form__hint">{move || lines_label(line_count(&value.get()))}</span>
        </div>
    }
}
