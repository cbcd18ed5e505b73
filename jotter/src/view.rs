use iced::widget::{column, container, mouse_area, opaque, row};
use iced::{Element, Length, Padding, Theme, alignment};

use super::{App, Event};
use crate::features::documents::DocumentsEvent;
use crate::state::Route;
use crate::theme::ThemeProps;
use crate::ui::widgets::spinner::{self, SpinnerProps, SpinnerSize};
use crate::ui::widgets::trash_box::TRASH_BOX_WIDTH;
use crate::ui::widgets::{
    document_page, documents_empty, navbar, settings_dialog, sidebar,
    toast_stack, trash_box,
};

const TRASH_BOX_BOTTOM_OFFSET: f32 = 16.0;

pub(super) fn view(app: &App) -> Element<'_, Event, Theme, iced::Renderer> {
    let theme = app.theme_manager().current();
    let theme_props: ThemeProps<'_> = ThemeProps::new(theme);
    let geometry = app.features.panel().geometry();

    let mut base = row![].width(Length::Fill).height(Length::Fill);
    if geometry.panel_width > 0.0 {
        base = base.push(view_sidebar(app, theme_props, geometry.panel_width));
    }
    if geometry.top_bar_width > 0.0 {
        base = base.push(
            column![
                view_navbar(app, theme_props, geometry.top_bar_width),
                view_main(app, theme_props),
            ]
            .width(Length::Fixed(geometry.top_bar_width))
            .height(Length::Fill),
        );
    }

    let palette = theme_props.theme.iced_palette();
    let background = palette.background;
    let base = container(base)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(background.into()),
            ..Default::default()
        });

    let mut layers: Vec<Element<'_, Event, Theme, iced::Renderer>> =
        vec![base.into()];

    if app.features.documents().is_trash_open() {
        layers.push(view_trash_overlay(
            app,
            theme_props,
            geometry.panel_width,
        ));
    }

    if app.features.settings().is_dialog_open() {
        let state = app.features.settings().state();
        layers.push(
            settings_dialog::view(settings_dialog::SettingsDialogProps {
                user_name: state.draft().user_name(),
                appearance: state.draft().appearance(),
                is_dirty: state.is_dirty(),
                is_saving: state.is_saving(),
                theme: theme_props,
                fonts: app.fonts(),
            })
            .map(Event::SettingsDialog),
        );
    }

    if !app.features.toast().toasts().is_empty() {
        layers.push(
            toast_stack::view(toast_stack::ToastStackProps {
                toasts: app.features.toast().toasts(),
                spinner_frame: app.state().spinner_frame(),
                theme: theme_props,
                fonts: app.fonts(),
            })
            .map(Event::ToastStack),
        );
    }

    iced::widget::Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_sidebar<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
    width: f32,
) -> Element<'a, Event, Theme, iced::Renderer> {
    let documents = app.features.documents();

    sidebar::view(sidebar::SidebarProps {
        width,
        user_name: app.features.settings().current().user_name(),
        rows: documents.rows(),
        active_document: app.state().route().document(),
        loading: !documents.is_loaded(),
        spinner_frame: app.state().spinner_frame(),
        trash_open: documents.is_trash_open(),
        theme: theme_props,
        fonts: app.fonts(),
    })
    .map(Event::Sidebar)
}

fn view_navbar<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
    width: f32,
) -> Element<'a, Event, Theme, iced::Renderer> {
    let open = app
        .state()
        .route()
        .document()
        .and_then(|id| app.features.documents().document(id));

    navbar::view(navbar::NavbarProps {
        is_collapsed: app.features.panel().is_collapsed(),
        title: open.map(|document| document.title.as_str()),
        can_archive: open.is_some_and(|document| !document.is_archived),
        width,
        theme: theme_props,
        fonts: app.fonts(),
    })
    .map(Event::Navbar)
}

/// Render the page selected by the current route.
fn view_main<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, Event, Theme, iced::Renderer> {
    let documents = app.features.documents();
    let user_name = app.features.settings().current().user_name();

    match app.state().route() {
        Route::Document(id) => match documents.document(id) {
            Some(document) => {
                document_page::view(document_page::DocumentPageProps {
                    title: &document.title,
                    is_archived: document.is_archived,
                    theme: theme_props,
                    fonts: app.fonts(),
                })
                .map(Event::DocumentPage)
            },
            None if !documents.is_loaded() => view_loading(app, theme_props),
            None => view_empty(app, theme_props, user_name),
        },
        Route::Documents => view_empty(app, theme_props, user_name),
    }
}

fn view_empty<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
    user_name: &'a str,
) -> Element<'a, Event, Theme, iced::Renderer> {
    documents_empty::view(documents_empty::DocumentsEmptyProps {
        user_name,
        busy: app.features.documents().is_busy(),
        spinner_frame: app.state().spinner_frame(),
        theme: theme_props,
        fonts: app.fonts(),
    })
    .map(Event::DocumentsEmpty)
}

fn view_loading<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, Event, Theme, iced::Renderer> {
    let spinner = spinner::view(SpinnerProps {
        size: SpinnerSize::Icon,
        frame: app.state().spinner_frame(),
        theme: theme_props,
    })
    .map(|event| match event {});

    container(spinner)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Render the trash popover next to the panel over a click-away backdrop.
fn view_trash_overlay<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
    panel_width: f32,
) -> Element<'a, Event, Theme, iced::Renderer> {
    let documents = app.features.documents();
    let viewport_width = app.state().window_size.width;
    let left = panel_width
        .min(viewport_width - TRASH_BOX_WIDTH)
        .max(0.0);

    let popover = trash_box::view(trash_box::TrashBoxProps {
        documents: documents.trashed(),
        search: documents.trash_search(),
        theme: theme_props,
        fonts: app.fonts(),
    })
    .map(Event::TrashBox);

    let positioned = container(opaque(popover))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Bottom)
        .padding(Padding {
            left,
            bottom: TRASH_BOX_BOTTOM_OFFSET,
            ..Padding::ZERO
        });

    mouse_area(positioned)
        .on_press(Event::Documents(DocumentsEvent::CloseTrash))
        .into()
}
