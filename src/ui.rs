use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};
use tui_dispatch::{
    Component, EventContext, EventKind, EventRoutingState, HandlerResponse, RenderContext,
};
use tui_dispatch_components::style::BorderStyle;
use tui_dispatch_components::{
    BaseStyle, Padding, SelectList, SelectListBehavior, SelectListProps, SelectListStyle,
    SelectionStyle, StatusBar, StatusBarHint, StatusBarItem, StatusBarProps, StatusBarSection,
    StatusBarStyle,
};

use crate::action::Action;
use crate::api;
use crate::marks;
use crate::state::{AppState, DetailTab, FocusArea, StatEntry};

const BG_BASE: Color = Color::Rgb(16, 14, 22);
const BG_PANEL: Color = Color::Rgb(28, 24, 38);
const BG_PANEL_ALT: Color = Color::Rgb(36, 31, 48);
const BG_HIGHLIGHT: Color = Color::Rgb(96, 44, 62);
const TEXT_MAIN: Color = Color::Rgb(238, 234, 244);
const TEXT_DIM: Color = Color::Rgb(168, 160, 184);
const ACCENT_RED: Color = Color::Rgb(228, 88, 96);
const ACCENT_GOLD: Color = Color::Rgb(230, 186, 94);

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum DexComponentId {
    Header,
    Grid,
    Detail,
    Search,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DexContext {
    Header,
    Grid,
    Detail,
    Search,
}

impl EventRoutingState<DexComponentId, DexContext> for AppState {
    fn focused(&self) -> Option<DexComponentId> {
        if self.search.active {
            return Some(DexComponentId::Search);
        }
        match self.focus {
            FocusArea::Grid => Some(DexComponentId::Grid),
            FocusArea::Detail => Some(DexComponentId::Detail),
        }
    }

    fn modal(&self) -> Option<DexComponentId> {
        if self.search.active {
            Some(DexComponentId::Search)
        } else {
            None
        }
    }

    fn binding_context(&self, id: DexComponentId) -> DexContext {
        match id {
            DexComponentId::Header => DexContext::Header,
            DexComponentId::Grid => DexContext::Grid,
            DexComponentId::Detail => DexContext::Detail,
            DexComponentId::Search => DexContext::Search,
        }
    }

    fn default_context(&self) -> DexContext {
        DexContext::Grid
    }
}

pub struct DexUi {
    grid_list: SelectList,
    status_bar: StatusBar,
}

impl DexUi {
    pub fn new() -> Self {
        Self {
            grid_list: SelectList::new(),
            status_bar: StatusBar::new(),
        }
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<DexComponentId>,
    ) {
        render_app(
            frame,
            area,
            state,
            render_ctx,
            event_ctx,
            &mut self.grid_list,
            &mut self.status_bar,
        );
    }

    pub fn handle_header_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        handle_header_event(event, state)
    }

    pub fn handle_grid_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        handle_grid_event(event, state, &mut self.grid_list)
    }

    pub fn handle_detail_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        handle_detail_event(event, state)
    }

    pub fn handle_search_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        handle_search_event(event, state)
    }
}

impl Default for DexUi {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::too_many_arguments)]
pub fn render_app(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    _render_ctx: RenderContext,
    event_ctx: &mut EventContext<DexComponentId>,
    grid_list: &mut SelectList,
    status_bar: &mut StatusBar,
) {
    let base = Block::default().style(Style::default().bg(BG_BASE));
    frame.render_widget(base, area);
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

    render_header(frame, layout[0], state, event_ctx);
    render_body(frame, layout[1], state, event_ctx, grid_list);
    render_footer(frame, layout[2], state, status_bar);
}

pub fn handle_header_event(event: &EventKind, _state: &AppState) -> HandlerResponse<Action> {
    let actions = match event {
        EventKind::Key(key) => match key.code {
            crossterm::event::KeyCode::Char('c') => vec![Action::TypeFilterClear],
            _ => vec![],
        },
        _ => vec![],
    };
    handler_response(actions)
}

pub fn handle_grid_event(
    event: &EventKind,
    state: &AppState,
    grid_list: &mut SelectList,
) -> HandlerResponse<Action> {
    let actions = match event {
        EventKind::Key(key) => match key.code {
            crossterm::event::KeyCode::PageDown => vec![Action::SelectionPage(1)],
            crossterm::event::KeyCode::PageUp => vec![Action::SelectionPage(-1)],
            crossterm::event::KeyCode::Home => vec![Action::SelectionJumpTop],
            crossterm::event::KeyCode::End => vec![Action::SelectionJumpBottom],
            crossterm::event::KeyCode::Enter => vec![Action::DetailOpen],
            crossterm::event::KeyCode::Char(' ') => vec![Action::ToggleCaught],
            _ => {
                let items = grid_items(state);
                let props = SelectListProps {
                    items: &items,
                    count: items.len(),
                    selected: state.selected_index.min(items.len().saturating_sub(1)),
                    is_focused: true,
                    style: grid_list_style(),
                    behavior: SelectListBehavior {
                        show_scrollbar: true,
                        wrap_navigation: false,
                    },
                    on_select: Action::GridSelect,
                    render_item: &|item| item.clone(),
                };
                let actions: Vec<_> = grid_list.handle_event(event, props).into_iter().collect();
                return handler_response(actions);
            }
        },
        EventKind::Scroll { delta, .. } => vec![Action::SelectionMove((*delta * 3) as i16)],
        _ => vec![],
    };
    handler_response(actions)
}

pub fn handle_detail_event(event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
    let actions = match event {
        EventKind::Key(key) => match key.code {
            crossterm::event::KeyCode::Left | crossterm::event::KeyCode::Char('h') => {
                vec![Action::DetailTabPrev]
            }
            crossterm::event::KeyCode::Right | crossterm::event::KeyCode::Char('l') => {
                vec![Action::DetailTabNext]
            }
            crossterm::event::KeyCode::Esc => {
                if state.detail_id.is_some() {
                    vec![Action::DetailClose]
                } else {
                    vec![]
                }
            }
            crossterm::event::KeyCode::Char(' ') => vec![Action::ToggleCaught],
            _ => vec![],
        },
        _ => vec![],
    };
    handler_response(actions)
}

pub fn handle_search_event(event: &EventKind, _state: &AppState) -> HandlerResponse<Action> {
    let actions = match event {
        EventKind::Key(key) => match key.code {
            crossterm::event::KeyCode::Esc => vec![Action::SearchCancel],
            crossterm::event::KeyCode::Enter => vec![Action::SearchSubmit],
            crossterm::event::KeyCode::Backspace => vec![Action::SearchBackspace],
            crossterm::event::KeyCode::Char(ch) => vec![Action::SearchInput(ch)],
            _ => vec![],
        },
        _ => vec![],
    };
    handler_response(actions)
}

fn handler_response(actions: Vec<Action>) -> HandlerResponse<Action> {
    if actions.is_empty() {
        HandlerResponse::ignored()
    } else {
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn render_header(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    event_ctx: &mut EventContext<DexComponentId>,
) {
    event_ctx.set_component_area(DexComponentId::Header, area);
    if state.search.active {
        event_ctx.set_component_area(DexComponentId::Search, area);
    }
    let title_style = Style::default().fg(ACCENT_RED).add_modifier(Modifier::BOLD);
    let generation = state.selected_generation();
    let type_label = state
        .type_filter
        .as_deref()
        .map(|name| name.to_ascii_uppercase())
        .unwrap_or_else(|| "ALL".to_string());
    let search = if state.search.active {
        format!("/{}_", state.search.query)
    } else if state.search.query.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", state.search.query)
    };
    let progress = if state.list_loading {
        let spinner = SPINNER[state.tick as usize % SPINNER.len()];
        format!("{}/{} {}", state.roster.len(), generation.len(), spinner)
    } else {
        format!("{}/{}", state.roster.len(), generation.len())
    };

    let header_text = Text::from(vec![
        Line::from(vec![
            Span::styled(
                format!("GEN {} · {}", generation.label, generation.region),
                title_style,
            ),
            Span::raw("  "),
            Span::styled(progress, Style::default().fg(ACCENT_GOLD)),
            Span::raw("  |  Type: "),
            Span::styled(type_label, Style::default().fg(ACCENT_GOLD)),
            Span::raw("  |  Show: "),
            Span::styled(
                state.caught_filter.label(),
                Style::default().fg(ACCENT_GOLD),
            ),
            Span::raw("  |  Search: "),
            Span::styled(search, Style::default().fg(ACCENT_RED)),
        ]),
        Line::from(vec![
            Span::raw("Caught here: "),
            Span::styled(
                format!("{}/{}", state.caught_in_generation(), generation.len()),
                Style::default().fg(ACCENT_GOLD),
            ),
            Span::raw("  Total: "),
            Span::styled(
                format!("{}/{}", state.total_caught(), state.total_records()),
                Style::default().fg(ACCENT_RED),
            ),
            Span::raw("  |  Sprites: "),
            Span::styled(
                if state.show_shiny { "SHINY" } else { "NORMAL" },
                Style::default().fg(ACCENT_GOLD),
            ),
        ]),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
        .border_style(Style::default().fg(TEXT_DIM))
        .title("DEXTRACK");
    let paragraph = Paragraph::new(header_text)
        .block(block)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(TEXT_MAIN));
    frame.render_widget(paragraph, area);
}

fn render_body(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    event_ctx: &mut EventContext<DexComponentId>,
    grid_list: &mut SelectList,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
        .split(area);

    render_grid(frame, layout[0], state, event_ctx, grid_list);
    render_detail(frame, layout[1], state, event_ctx);
}

fn render_grid(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    event_ctx: &mut EventContext<DexComponentId>,
    grid_list: &mut SelectList,
) {
    event_ctx.set_component_area(DexComponentId::Grid, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("DEX")
        .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
        .border_style(focus_border(state, FocusArea::Grid));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let items = grid_items(state);
    if items.is_empty() {
        let message = if state.list_loading && state.roster.is_empty() {
            "Loading dex..."
        } else if state.roster.is_empty() {
            "No entries loaded."
        } else {
            "No entries match the filters."
        };
        frame.render_widget(
            Paragraph::new(message)
                .style(Style::default().fg(TEXT_DIM))
                .wrap(Wrap { trim: true }),
            inner,
        );
        return;
    }

    let props = SelectListProps {
        items: &items,
        count: items.len(),
        selected: state.selected_index.min(items.len().saturating_sub(1)),
        is_focused: state.focus == FocusArea::Grid,
        style: grid_list_style(),
        behavior: SelectListBehavior {
            show_scrollbar: true,
            wrap_navigation: false,
        },
        on_select: Action::GridSelect,
        render_item: &|item| item.clone(),
    };
    grid_list.render(frame, inner, props);
}

fn grid_items(state: &AppState) -> Vec<Line<'static>> {
    state
        .filtered_indices
        .iter()
        .filter_map(|idx| state.roster.get(*idx))
        .filter_map(|id| state.cache.record(*id))
        .map(|record| {
            let mark = if state.is_caught(record.id) { "●" } else { " " };
            let types = record.types.join("/");
            Line::from(format!(
                "{} #{:04} {:<12} {}",
                mark, record.id, record.name, types
            ))
        })
        .collect()
}

fn render_detail(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    event_ctx: &mut EventContext<DexComponentId>,
) {
    event_ctx.set_component_area(DexComponentId::Detail, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("DATA")
        .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
        .border_style(focus_border(state, FocusArea::Detail));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.detail_id.is_none() {
        render_preview(frame, inner, state);
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(2),
            Constraint::Min(4),
        ])
        .split(inner);

    render_detail_headline(frame, layout[0], state);

    let tabs = Tabs::new(vec!["Stats", "About", "Marks", "Locations"])
        .select(detail_tab_index(state))
        .style(Style::default().fg(TEXT_DIM))
        .highlight_style(Style::default().fg(ACCENT_RED).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, layout[1]);

    let content = match state.detail_tab {
        DetailTab::Stats => stats_text(state),
        DetailTab::About => about_text(state),
        DetailTab::Marks => marks_text(state),
        DetailTab::Locations => locations_text(state),
    };
    frame.render_widget(
        Paragraph::new(content)
            .style(Style::default().fg(TEXT_MAIN))
            .wrap(Wrap { trim: true }),
        layout[2],
    );
}

fn render_preview(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(record) = state.selected_record() else {
        frame.render_widget(
            Paragraph::new("Select an entry.")
                .alignment(Alignment::Center)
                .style(Style::default().fg(TEXT_DIM)),
            area,
        );
        return;
    };
    let caught = if state.is_caught(record.id) {
        "caught"
    } else {
        "not caught"
    };
    let lines = vec![
        Line::from(Span::styled(
            format!("{}  #{:04}", record.name.to_ascii_uppercase(), record.id),
            Style::default().fg(ACCENT_RED).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Type: {}", record.types.join(" / "))),
        Line::from(format!("Status: {caught}")),
        Line::from(" "),
        Line::from(Span::styled(
            format!("Sprite: {}", api::sprite_url(record.id, state.show_shiny)),
            Style::default().fg(TEXT_DIM),
        )),
        Line::from(" "),
        Line::from(Span::styled(
            "Enter opens the full entry.",
            Style::default().fg(TEXT_DIM),
        )),
    ];
    frame.render_widget(
        Paragraph::new(Text::from(lines)).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_detail_headline(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(record) = state.detail_record() else {
        return;
    };
    let mut badges: Vec<Span<'static>> = Vec::new();
    if let Some(species) = state.detail_species() {
        if species.is_legendary {
            badges.push(Span::styled(
                " LEGENDARY ",
                Style::default().fg(BG_BASE).bg(ACCENT_GOLD),
            ));
        }
        if species.is_mythical {
            badges.push(Span::styled(
                " MYTHICAL ",
                Style::default().fg(BG_BASE).bg(ACCENT_RED),
            ));
        }
    }
    let caught = if state.is_caught(record.id) {
        Span::styled("● caught", Style::default().fg(ACCENT_GOLD))
    } else {
        Span::styled("○ not caught", Style::default().fg(TEXT_DIM))
    };

    let mut title = vec![
        Span::styled(
            format!("{}  #{:04}  ", record.name.to_ascii_uppercase(), record.id),
            Style::default().fg(ACCENT_RED).add_modifier(Modifier::BOLD),
        ),
        caught,
        Span::raw("  "),
    ];
    title.extend(badges);

    let loading = if state.detail_loading() {
        let spinner = SPINNER[state.tick as usize % SPINNER.len()];
        format!("loading {spinner}")
    } else {
        String::new()
    };

    let lines = vec![
        Line::from(title),
        Line::from(format!("Type: {}", record.types.join(" / "))),
        Line::from(vec![
            Span::styled(
                format!("Sprite: {}", api::sprite_url(record.id, state.show_shiny)),
                Style::default().fg(TEXT_DIM),
            ),
            Span::raw("  "),
            Span::styled(loading, Style::default().fg(ACCENT_GOLD)),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(Text::from(lines)).wrap(Wrap { trim: true }),
        area,
    );
}

fn stats_text(state: &AppState) -> Text<'static> {
    let Some(record) = state.detail_record() else {
        return Text::from("No data loaded.");
    };
    let mut lines: Vec<Line<'static>> = record
        .stats
        .iter()
        .map(|stat| Line::from(render_stat(stat)))
        .collect();
    lines.push(Line::from(" "));
    lines.push(Line::from(format!(
        "Height: {}  Weight: {}  Base XP: {}",
        dimension(record.height),
        dimension(record.weight),
        dimension(record.base_experience),
    )));
    if !record.abilities.is_empty() {
        let abilities = record
            .abilities
            .iter()
            .map(|ability| {
                if ability.is_hidden {
                    format!("{} (hidden)", ability.name)
                } else {
                    ability.name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(Line::from(format!("Abilities: {abilities}")));
    }
    Text::from(lines)
}

fn about_text(state: &AppState) -> Text<'static> {
    let Some(species) = state.detail_species() else {
        if state.species_pending {
            return Text::from("Loading species data...");
        }
        return Text::from("Species data unavailable.");
    };
    let mut lines = Vec::new();
    if let Some(genus) = species.genus.as_ref() {
        lines.push(Line::from(Span::styled(
            genus.clone(),
            Style::default().fg(ACCENT_GOLD),
        )));
    }
    if let Some(flavor) = species.flavor_text.as_ref() {
        lines.push(Line::from(flavor.clone()));
        lines.push(Line::from(" "));
    }
    if let Some(habitat) = species.habitat.as_ref() {
        lines.push(Line::from(format!("Habitat: {}", format_name(habitat))));
    }
    if let Some(shape) = species.shape.as_ref() {
        lines.push(Line::from(format!("Shape: {}", format_name(shape))));
    }
    if let Some(rate) = species.growth_rate.as_ref() {
        lines.push(Line::from(format!("Growth: {}", format_name(rate))));
    }
    if let Some(rate) = species.capture_rate {
        lines.push(Line::from(format!("Capture rate: {rate}")));
    }
    if let Some(happiness) = species.base_happiness {
        lines.push(Line::from(format!("Base happiness: {happiness}")));
    }
    if !species.egg_groups.is_empty() {
        let groups = species
            .egg_groups
            .iter()
            .map(|group| format_name(group))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(Line::from(format!("Egg groups: {groups}")));
    }
    if lines.is_empty() {
        return Text::from("No species details.");
    }
    Text::from(lines)
}

fn marks_text(state: &AppState) -> Text<'static> {
    if state.species_pending || state.encounter_pending {
        return Text::from("Resolving origin marks...");
    }
    let derived = marks::derive_marks(state.detail_species(), state.detail_encounters());
    if derived.is_empty() {
        return Text::from(
            "No origin mark. Entries first seen in generations III-V carry none.",
        );
    }
    let mut lines = Vec::new();
    for mark in derived {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {}", mark.symbol, mark.name),
                Style::default().fg(mark.color).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(mark.games.to_string(), Style::default().fg(TEXT_DIM)),
        ]));
    }
    Text::from(lines)
}

fn locations_text(state: &AppState) -> Text<'static> {
    let Some(encounters) = state.detail_encounters() else {
        if state.encounter_pending {
            return Text::from("Loading encounter data...");
        }
        return Text::from("Encounter data unavailable.");
    };
    if encounters.is_empty() {
        return Text::from("No known wild locations.");
    }
    let mut lines = Vec::new();
    for location in encounters {
        lines.push(Line::from(Span::styled(
            format_name(&location.location),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for version in &location.version_details {
            let slots = version
                .encounters
                .iter()
                .map(|slot| {
                    let level = if slot.min_level == slot.max_level {
                        format!("Lv{}", slot.min_level)
                    } else {
                        format!("Lv{}-{}", slot.min_level, slot.max_level)
                    };
                    format!("{} {} {}%", format_name(&slot.method), level, slot.chance)
                })
                .collect::<Vec<_>>()
                .join(" | ");
            lines.push(Line::from(Span::styled(
                format!("  {}: {}", format_name(&version.version), slots),
                Style::default().fg(TEXT_DIM),
            )));
        }
    }
    Text::from(lines)
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState, status_bar: &mut StatusBar) {
    let status = state.message.clone().unwrap_or_else(|| {
        if state.list_loading {
            "Loading dex...".to_string()
        } else if state.detail_loading() {
            "Loading entry...".to_string()
        } else {
            String::new()
        }
    });
    let (left_hints, center_hints) = status_hints(state);
    let status_style = if state.message.is_some() {
        Style::default().fg(ACCENT_RED)
    } else {
        Style::default().fg(ACCENT_GOLD)
    };
    let status_span = Span::styled(status, status_style);
    let status_items = [StatusBarItem::span(status_span)];

    let style = StatusBarStyle {
        base: BaseStyle {
            border: Some(BorderStyle {
                borders: Borders::ALL,
                style: Style::default().fg(TEXT_DIM),
                focused_style: Some(Style::default().fg(ACCENT_RED)),
            }),
            padding: Padding::xy(1, 0),
            bg: Some(BG_PANEL),
            fg: Some(TEXT_MAIN),
        },
        text: Style::default().fg(TEXT_DIM),
        hint_key: Style::default().fg(ACCENT_RED).add_modifier(Modifier::BOLD),
        hint_label: Style::default().fg(TEXT_DIM),
        separator: Style::default().fg(TEXT_DIM),
    };

    let props = StatusBarProps {
        left: StatusBarSection::hints(&left_hints).with_separator("  "),
        center: StatusBarSection::hints(&center_hints).with_separator("  "),
        right: StatusBarSection::items(&status_items).with_separator("  "),
        style,
        is_focused: false,
    };
    Component::<Action>::render(status_bar, frame, area, props);
}

fn status_hints(state: &AppState) -> (Vec<StatusBarHint<'static>>, Vec<StatusBarHint<'static>>) {
    if state.search.active {
        let left = vec![
            StatusBarHint::new("Enter", "Apply"),
            StatusBarHint::new("Esc", "Cancel"),
            StatusBarHint::new("Bksp", "Delete"),
        ];
        let center = vec![StatusBarHint::new("q", "Quit")];
        return (left, center);
    }

    let mut left = Vec::new();
    match state.focus {
        FocusArea::Grid => {
            left.extend([
                StatusBarHint::new("j/k", "Move"),
                StatusBarHint::new("PgUp/PgDn", "Page"),
                StatusBarHint::new("Enter", "Open"),
                StatusBarHint::new("Space", "Caught"),
            ]);
        }
        FocusArea::Detail => {
            left.extend([
                StatusBarHint::new("h/l", "Tabs"),
                StatusBarHint::new("Esc", "Close"),
                StatusBarHint::new("Space", "Caught"),
            ]);
        }
    }
    if state.message.is_some() {
        left.push(StatusBarHint::new("r", "Retry"));
    }

    let center = vec![
        StatusBarHint::new("Tab", "Focus"),
        StatusBarHint::new("/", "Search"),
        StatusBarHint::new("[ ]", "Type"),
        StatusBarHint::new("g/G", "Gen"),
        StatusBarHint::new("v", "Caught filter"),
        StatusBarHint::new("s", "Shiny"),
        StatusBarHint::new("q", "Quit"),
    ];
    (left, center)
}

fn grid_list_style() -> SelectListStyle {
    SelectListStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::xy(1, 0),
            bg: None,
            fg: Some(TEXT_MAIN),
        },
        selection: SelectionStyle {
            style: Some(
                Style::default()
                    .bg(BG_HIGHLIGHT)
                    .fg(TEXT_MAIN)
                    .add_modifier(Modifier::BOLD),
            ),
            marker: None,
            disabled: false,
        },
        ..SelectListStyle::default()
    }
}

fn detail_tab_index(state: &AppState) -> usize {
    match state.detail_tab {
        DetailTab::Stats => 0,
        DetailTab::About => 1,
        DetailTab::Marks => 2,
        DetailTab::Locations => 3,
    }
}

fn dimension(value: Option<u16>) -> String {
    value
        .map(|value| value.to_string())
        .unwrap_or_else(|| "--".to_string())
}

fn format_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => format!("{}{}", first.to_ascii_uppercase(), chars.as_str()),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_stat(stat: &StatEntry) -> String {
    let label = shorten_stat(&stat.name);
    let bar_len = (stat.value as usize / 10).clamp(1, 20);
    let bar = "#".repeat(bar_len);
    format!("{label:>4} {value:>3} {bar}", value = stat.value)
}

fn shorten_stat(name: &str) -> String {
    match name {
        "hp" => " HP".to_string(),
        "attack" => "ATK".to_string(),
        "defense" => "DEF".to_string(),
        "special-attack" => "SAT".to_string(),
        "special-defense" => "SDF".to_string(),
        "speed" => "SPD".to_string(),
        _ => name.to_ascii_uppercase(),
    }
}

fn focus_border(state: &AppState, area: FocusArea) -> Style {
    if state.focus == area {
        Style::default().fg(ACCENT_RED).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_DIM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_title_case_per_segment() {
        assert_eq!(format_name("viridian-forest"), "Viridian Forest");
        assert_eq!(format_name("walk"), "Walk");
    }

    #[test]
    fn stat_bar_is_bounded() {
        let stat = StatEntry {
            name: "attack".to_string(),
            value: 255,
        };
        let line = render_stat(&stat);
        assert!(line.starts_with(" ATK"));
        assert!(line.contains(&"#".repeat(20)));
        assert!(!line.contains(&"#".repeat(21)));
    }
}
