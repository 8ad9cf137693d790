//! Main window view.
//!
//! Input rows for a file and a folder, the action buttons, progress, and
//! the status log. Files dropped anywhere on the window are queued by the
//! subscription in `App`.

use iced::alignment::Vertical;
use iced::widget::{button, column, container, progress_bar, row, scrollable, text, text_input};
use iced::{Element, Length};

use crate::app::{App, Message};
use crate::theme::{font, spacing};

/// Build the main window view.
pub fn view(app: &App) -> Element<'_, Message> {
    let idle = !app.is_processing;

    let file_row = input_row(
        "Input File:",
        "Select a .dae file...",
        &app.file_path,
        Message::FilePathChanged,
        idle.then_some(Message::BrowseFile),
    );
    let folder_row = input_row(
        "Input Folder:",
        "Select a folder containing .dae files...",
        &app.folder_path,
        Message::FolderPathChanged,
        idle.then_some(Message::BrowseFolder),
    );

    let pending = app.session.pending().len();
    let process_label = if pending > 0 {
        format!("Process {} Dropped File(s)", pending)
    } else {
        "Process".to_string()
    };

    let actions = row![
        button(text(process_label)).on_press_maybe(idle.then_some(Message::Process)),
        button(text("Clear")).on_press_maybe(idle.then_some(Message::Clear)),
    ]
    .spacing(spacing::SM);

    let progress = progress_bar(0.0..=100.0, app.progress_value);

    let status = text(app.status_text.as_str()).size(font::SM);

    let log_text = app.session.log().text();
    let log = container(
        scrollable(
            text(log_text)
                .size(font::SM)
                .width(Length::Fill),
        )
        .height(Length::Fill),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .height(Length::Fill);

    let hint = text("Drop .dae files or folders onto this window to queue them.").size(font::SM);

    let content = column![
        text("DAE Fixer").size(font::LG),
        file_row,
        folder_row,
        actions,
        progress,
        status,
        text("Log").size(font::NORMAL),
        log,
        hint,
    ]
    .spacing(spacing::MD)
    .padding(spacing::LG);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Label, path field and Browse button on one line.
fn input_row<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_input: fn(String) -> Message,
    on_browse: Option<Message>,
) -> Element<'a, Message> {
    row![
        text(label).size(font::NORMAL).width(Length::Fixed(100.0)),
        text_input(placeholder, value)
            .on_input(on_input)
            .width(Length::Fill),
        button(text("Browse...")).on_press_maybe(on_browse),
    ]
    .spacing(spacing::SM)
    .align_y(Vertical::Center)
    .into()
}
