use super::*;

/// Draw, then either run the fetch a navigation queued or wait for a key.
///
/// A queued load runs right after the frame that shows "Loading...", so the
/// blocking request never hides the loading state.
pub(super) fn run_loop(screen: &mut Screen, app: &mut App) -> Result<()> {
    while !app.quit {
        screen.draw(|f| super::render::draw(f, app)).context("draw")?;

        if app.pending_load {
            app.run_pending_load();
        } else if event::poll(Duration::from_millis(50)).context("poll")? {
            if let Event::Key(k) = event::read().context("read event")? {
                if k.kind == KeyEventKind::Press {
                    handle_key(app, k);
                }
            }
        }
    }
    Ok(())
}

#[derive(Clone, Copy)]
enum Step {
    Back,
    Forward,
}

pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    if app.modal.is_some() {
        modal::handle_modal_key(app, key);
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => app.quit = true,
        KeyCode::Char('q') if app.input.buf.is_empty() => app.quit = true,
        KeyCode::Esc => on_escape(app),
        KeyCode::Enter => on_enter(app),
        KeyCode::Tab if !app.suggestions.is_empty() => app.apply_selected_suggestion(),
        KeyCode::Up => step(app, Step::Back),
        KeyCode::Down => step(app, Step::Forward),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        code => {
            if edit_input(&mut app.input, code, ctrl) {
                app.recompute_suggestions();
            }
        }
    }
}

// Clear typed text first, then back out of views, then leave.
fn on_escape(app: &mut App) {
    if !app.input.buf.is_empty() {
        app.input.clear();
        app.recompute_suggestions();
    } else if app.frames.len() > 1 {
        app.pop_mode();
    } else {
        app.quit = true;
    }
}

fn on_enter(app: &mut App) {
    if app.input.buf.is_empty() {
        app.run_default_action();
        return;
    }

    let last = app.suggestions.len().saturating_sub(1);
    if let Some(chosen) = app
        .suggestions
        .get(app.suggestion_selected.min(last))
        .map(|s| s.name)
    {
        let typed = app
            .input
            .buf
            .trim_start_matches('/')
            .split_whitespace()
            .next()
            .unwrap_or("");
        if typed != chosen {
            app.apply_selected_suggestion();
        }
    }
    app.run_current_input();
}

/// Arrow keys move the view selection when the input is empty, cycle
/// suggestions while typing, and walk history otherwise.
fn step(app: &mut App, dir: Step) {
    if app.input.buf.is_empty() {
        if let Some(v) = app.view_mut() {
            match dir {
                Step::Back => v.move_up(),
                Step::Forward => v.move_down(),
            }
        }
        return;
    }

    let n = app.suggestions.len();
    if n > 0 {
        let cur = app.suggestion_selected % n;
        app.suggestion_selected = match dir {
            Step::Back => (cur + n - 1) % n,
            Step::Forward => (cur + 1) % n,
        };
        return;
    }

    match dir {
        Step::Back => app.input.history_up(),
        Step::Forward => app.input.history_down(),
    }
    app.recompute_suggestions();
}

/// Returns whether the buffer may have changed.
fn edit_input(input: &mut Input, code: KeyCode, ctrl: bool) -> bool {
    match code {
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Char('u') if ctrl => input.clear(),
        KeyCode::Char('p') if ctrl => input.history_up(),
        KeyCode::Char('n') if ctrl => input.history_down(),
        KeyCode::Char(c) if !ctrl => input.insert_char(c),
        _ => return false,
    }
    true
}
