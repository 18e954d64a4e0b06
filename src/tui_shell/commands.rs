use super::{CommandDef, UiMode};

pub(super) fn global_command_defs(signed_in: bool) -> Vec<CommandDef> {
    let mut out = vec![
        CommandDef {
            name: "help",
            aliases: &["h", "?"],
            usage: "help [command]",
            help: "Show help",
        },
        CommandDef {
            name: "home",
            aliases: &[],
            usage: "home",
            help: "Go to the home page",
        },
        CommandDef {
            name: "refresh",
            aliases: &["r"],
            usage: "refresh",
            help: "Reload the current page",
        },
        CommandDef {
            name: "quit",
            aliases: &["exit"],
            usage: "quit",
            help: "Exit",
        },
        CommandDef {
            name: "companies",
            aliases: &["c"],
            usage: "companies [term]",
            help: "List companies, optionally filtered by name",
        },
        CommandDef {
            name: "company",
            aliases: &[],
            usage: "company <handle>",
            help: "Open a company and its jobs",
        },
        CommandDef {
            name: "jobs",
            aliases: &["j"],
            usage: "jobs",
            help: "List jobs",
        },
        CommandDef {
            name: "profile",
            aliases: &["p"],
            usage: "profile",
            help: "Show your profile",
        },
    ];
    if signed_in {
        out.push(CommandDef {
            name: "logout",
            aliases: &[],
            usage: "logout",
            help: "Sign out and forget the stored token",
        });
    } else {
        out.extend(vec![
            CommandDef {
                name: "login",
                aliases: &[],
                usage: "login",
                help: "Sign in (guided prompt)",
            },
            CommandDef {
                name: "signup",
                aliases: &["register"],
                usage: "signup",
                help: "Create an account (guided prompt)",
            },
        ]);
    }
    out
}

pub(super) fn mode_command_defs(mode: UiMode) -> Vec<CommandDef> {
    match mode {
        UiMode::Companies => vec![CommandDef {
            name: "search",
            aliases: &["s"],
            usage: "search [term]",
            help: "Filter companies by name (empty clears)",
        }],
        UiMode::Company => vec![CommandDef {
            name: "apply",
            aliases: &["a"],
            usage: "apply",
            help: "Apply to the selected job",
        }],
        UiMode::Jobs => vec![
            CommandDef {
                name: "search",
                aliases: &["s"],
                usage: "search",
                help: "Edit the job filters (guided prompt)",
            },
            CommandDef {
                name: "title",
                aliases: &[],
                usage: "title [text]",
                help: "Filter by title (empty clears)",
            },
            CommandDef {
                name: "min-salary",
                aliases: &["salary"],
                usage: "min-salary [n]",
                help: "Minimum salary (empty clears)",
            },
            CommandDef {
                name: "equity",
                aliases: &[],
                usage: "equity",
                help: "Toggle the has-equity filter",
            },
            CommandDef {
                name: "apply",
                aliases: &["a"],
                usage: "apply",
                help: "Apply to the selected job",
            },
        ],
        UiMode::Profile => vec![CommandDef {
            name: "edit",
            aliases: &["e"],
            usage: "edit",
            help: "Edit your profile (guided prompt)",
        }],
        UiMode::Home | UiMode::Login | UiMode::Signup => Vec::new(),
    }
}

/// Commands offered by the current view, in the order hints list them.
pub(super) fn view_hint_commands(mode: UiMode) -> &'static [&'static str] {
    match mode {
        UiMode::Home => &[],
        UiMode::Companies => &["search", "company"],
        UiMode::Company => &["apply"],
        UiMode::Jobs => &["apply", "search", "title", "min-salary", "equity"],
        UiMode::Login => &["login", "signup"],
        UiMode::Signup => &["signup", "login"],
        UiMode::Profile => &["edit"],
    }
}
