use yew::prelude::*;

const NOTE_PATH: &str = "M19.589 6.686a4.94 4.94 0 0 1-3.778-3.633V2h-3.445v13.674a2.896 2.896 0 1 1-2.896-2.896 2.854 2.854 0 0 1 .593.067V9.382a6.329 6.329 0 1 0 5.753 6.292V8.848c1.283.959 2.856 1.493 4.773 1.493V6.891a4.833 4.833 0 0 1-1.002-.205Z";

/// Three stacked copies of the note glyph give the cyan/red split look.
#[function_component(NoteIcon)]
pub fn note_icon() -> Html {
    html! {
        <svg width="100%" height="100%" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
            <path d={NOTE_PATH} fill="#25F4EE" />
            <path d={NOTE_PATH} fill="#FE2C55" class="note-offset" />
            <path d={NOTE_PATH} fill="white" />
        </svg>
    }
}

#[function_component(Wordmark)]
pub fn wordmark() -> Html {
    html! {
        <div class="wordmark">
            <span class="wordmark-icon"><NoteIcon /></span>
            <span class="wordmark-text">{"TikTok"}</span>
        </div>
    }
}

#[function_component(ArrowRight)]
pub fn arrow_right() -> Html {
    html! {
        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="4" stroke-linecap="round" stroke-linejoin="round">
            <path d="M5 12h14" />
            <path d="m12 5 7 7-7 7" />
        </svg>
    }
}
