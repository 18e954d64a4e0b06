use super::*;

impl App {
    pub(super) fn available_command_defs(&self) -> Vec<CommandDef> {
        let mut defs = global_command_defs(self.ctx.is_signed_in());
        defs.extend(mode_command_defs(self.mode()));
        defs
    }

    pub(super) fn recompute_suggestions(&mut self) {
        let typed = Typed::parse(&self.input.buf);
        let word = typed.word.to_lowercase();

        self.suggestions = if !word.is_empty() {
            rank_suggestions(
                &word,
                self.available_command_defs(),
                view_hint_commands(self.mode()),
            )
        } else if typed.palette {
            // A bare `/` lists everything.
            let mut defs = self.available_command_defs();
            defs.sort_by_key(|d| d.name);
            defs
        } else {
            Vec::new()
        };

        let last = self.suggestions.len().saturating_sub(1);
        self.suggestion_selected = if word.is_empty() {
            0
        } else {
            self.suggestion_selected.min(last)
        };
    }

    /// Replaces the typed command word with the selected suggestion, keeping
    /// any arguments already typed.
    pub(super) fn apply_selected_suggestion(&mut self) {
        let last = self.suggestions.len().saturating_sub(1);
        let Some(def) = self.suggestions.get(self.suggestion_selected.min(last)) else {
            return;
        };
        let name = def.name;

        let typed = Typed::parse(&self.input.buf);
        let prefix = if typed.palette { "/" } else { "" };
        self.input.set(format!("{}{} {}", prefix, name, typed.rest));
        self.recompute_suggestions();
    }

    pub(super) fn run_current_input(&mut self) {
        let line = self.input.buf.trim().to_string();
        if line.is_empty() {
            return;
        }

        self.input.push_history(&line);
        self.echo_command(format!("{} {}", self.prompt(), line));
        self.input.clear();
        self.suggestions.clear();
        self.suggestion_selected = 0;

        let line = line.strip_prefix('/').unwrap_or(&line).trim();
        let tokens = match tokenize(line) {
            Ok(t) => t,
            Err(err) => {
                self.push_error(format!("parse error: {}", err));
                return;
            }
        };
        let Some((first, args)) = tokens.split_first() else {
            return;
        };

        let cmd = first.to_lowercase();
        let defs = self.available_command_defs();
        let resolved = defs
            .iter()
            .find(|d| d.name == cmd)
            .or_else(|| defs.iter().find(|d| d.aliases.contains(&cmd.as_str())))
            .map(|d| d.name)
            .or_else(|| {
                // Unambiguous prefix.
                let mut matches = defs.iter().filter(|d| d.name.starts_with(&cmd));
                match (matches.next(), matches.next()) {
                    (Some(d), None) => Some(d.name),
                    _ => None,
                }
            });

        let Some(name) = resolved else {
            self.push_error(format!("unknown command: {} (type `help`)", cmd));
            return;
        };
        self.dispatch(name, args);
    }

    fn dispatch(&mut self, cmd: &str, args: &[String]) {
        let joined = args.join(" ");
        match cmd {
            "help" => self.cmd_help(args),
            "quit" => self.quit = true,
            "home" => self.go_home(),
            "refresh" => self.request_reload(),

            "companies" => {
                self.navigate(Route::Companies);
                if let Some(v) = self.current_view_mut::<CompaniesView>() {
                    v.page.set_search(joined);
                }
            }
            "company" => {
                let Some(handle) = args.first() else {
                    self.push_error("usage: company <handle>".to_string());
                    return;
                };
                self.navigate(Route::Company(handle.clone()));
            }
            "jobs" => self.navigate(Route::Jobs),
            "profile" => self.navigate(Route::Profile),

            "login" => {
                self.navigate(Route::Login);
                self.start_login_wizard();
            }
            "signup" => {
                self.navigate(Route::Signup);
                self.start_signup_wizard();
            }
            "logout" => self.logout(),

            "search" => {
                if let Some(v) = self.current_view_mut::<CompaniesView>() {
                    v.page.set_search(joined);
                    v.selected = 0;
                    self.request_reload();
                } else if self.mode() == UiMode::Jobs {
                    self.start_jobs_filter_wizard();
                }
            }
            "title" => self.update_jobs_filter(|v| v.page.set_title(joined)),
            "min-salary" => self.update_jobs_filter(|v| v.page.set_min_salary(joined)),
            "equity" => self.update_jobs_filter(|v| {
                let on = !v.page.search.has_equity;
                v.page.set_has_equity(on);
            }),

            "apply" => self.apply_selected(),
            "edit" => self.start_profile_wizard(),

            _ => self.push_error(format!("unhandled command: {}", cmd)),
        }
    }

    pub(in crate::tui_shell) fn update_jobs_filter(&mut self, f: impl FnOnce(&mut JobsView)) {
        let Some(v) = self.current_view_mut::<JobsView>() else {
            self.push_error("not in jobs view".to_string());
            return;
        };
        f(v);
        v.selected = 0;
        let summary = format!("filters: {}", v.page.search.describe());
        self.request_reload();
        self.push_output(vec![summary]);
    }

    fn cmd_help(&mut self, args: &[String]) {
        let defs = self.available_command_defs();
        if let Some(q) = args.first() {
            let q = q.to_lowercase();
            match defs
                .iter()
                .find(|d| d.name == q || d.aliases.contains(&q.as_str()))
            {
                Some(d) => {
                    let mut lines = vec![format!("usage: {}", d.usage), d.help.to_string()];
                    if !d.aliases.is_empty() {
                        lines.push(format!("aliases: {}", d.aliases.join(", ")));
                    }
                    self.push_output(lines);
                }
                None => self.push_error(format!("unknown command: {}", q)),
            }
            return;
        }

        let mut lines: Vec<String> = defs
            .iter()
            .map(|d| format!("{: <18} {}", d.usage, d.help))
            .collect();
        lines.push(String::new());
        lines.push("Keys: Up/Down select, Enter default action, Esc back, q quit.".to_string());
        self.open_modal("Help", lines);
    }
}

/// The command word being typed and whatever follows it.
struct Typed<'a> {
    palette: bool,
    word: &'a str,
    rest: &'a str,
}

impl<'a> Typed<'a> {
    fn parse(buf: &'a str) -> Self {
        let trimmed = buf.trim_start();
        let palette = trimmed.starts_with('/');
        let line = trimmed.trim_start_matches('/').trim_start();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        Self {
            palette,
            word,
            rest: rest.trim_start(),
        }
    }
}
