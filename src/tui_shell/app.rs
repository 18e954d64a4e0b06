use std::io::{self, IsTerminal};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::context::{ApplyOutcome, UserContext};
use crate::routes::{NavLink, Route, guard, nav_links};

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::format_description::well_known::Rfc3339;

use super::commands::{global_command_defs, mode_command_defs, view_hint_commands};
use super::input::Input;
use super::modal;
use super::suggest::rank_suggestions;
use super::view::{RenderCtx, View};
use super::views::{
    AuthKind, AuthView, CompaniesView, CompanyView, HomeView, JobsView, ProfileView,
};
use super::wizard::{JobsFilterWizard, LoginWizard, ProfileWizard, SignupWizard};

mod cmd_dispatch;
mod cmd_text_input;
mod default_actions;
mod event_loop;
mod lifecycle;
mod modal_output;
mod modal_types;
mod parse_utils;
mod render;
mod status_types;
mod time_utils;
mod types;
mod view_nav;

pub(super) use self::modal_types::{Modal, ModalKind, TextInputAction};
use self::parse_utils::tokenize;
pub(super) use self::status_types::CommandDef;
use self::status_types::{StatusEntry, StatusKind};
pub(super) use self::time_utils::fmt_ts_ui;
pub(in crate::tui_shell) use self::time_utils::now_ts;
pub(super) use self::types::UiMode;

type Screen = Terminal<CrosstermBackend<io::Stdout>>;

pub(super) fn run(ctx: UserContext, opts: crate::tui::TuiRunOptions) -> Result<()> {
    if !(io::stdin().is_terminal() && io::stdout().is_terminal()) {
        anyhow::bail!("the interactive shell needs a terminal; pass a subcommand instead");
    }

    let mut screen = enter_screen()?;
    let mut app = App::load(ctx, opts);
    let res = event_loop::run_loop(&mut screen, &mut app);
    leave_screen(&mut screen);
    res
}

fn enter_screen() -> Result<Screen> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    let mut screen = Terminal::new(CrosstermBackend::new(stdout)).context("create terminal")?;
    screen.clear().ok();
    Ok(screen)
}

// Best effort: the shell is exiting either way.
fn leave_screen(screen: &mut Screen) {
    disable_raw_mode().ok();
    execute!(screen.backend_mut(), LeaveAlternateScreen).ok();
    screen.show_cursor().ok();
}

struct ViewFrame {
    view: Box<dyn View>,
}

pub(super) struct App {
    pub(in crate::tui_shell) ctx: UserContext,

    last_command: Option<String>,
    status: Option<StatusEntry>,

    modal: Option<Modal>,

    pub(super) login_wizard: Option<LoginWizard>,
    pub(super) signup_wizard: Option<SignupWizard>,
    pub(super) profile_wizard: Option<ProfileWizard>,
    pub(super) jobs_filter_wizard: Option<JobsFilterWizard>,

    input: Input,

    suggestions: Vec<CommandDef>,
    suggestion_selected: usize,

    /// Bottom frame is always the home view.
    frames: Vec<ViewFrame>,

    /// Set by navigation; the loop draws once, then runs the fetch.
    pending_load: bool,

    quit: bool,
}

impl App {
    pub(super) fn new(ctx: UserContext) -> Self {
        Self {
            ctx,
            last_command: None,
            status: None,
            modal: None,
            login_wizard: None,
            signup_wizard: None,
            profile_wizard: None,
            jobs_filter_wizard: None,
            input: Input::default(),
            suggestions: Vec::new(),
            suggestion_selected: 0,
            frames: vec![ViewFrame {
                view: Box::new(HomeView),
            }],
            pending_load: false,
            quit: false,
        }
    }
}
