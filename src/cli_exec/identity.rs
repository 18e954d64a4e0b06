use jobly::model::{Credentials, ProfileUpdate, SignupData};
use jobly::pages::ProfileForm;

use crate::cli_commands::identity::{LoginArgs, SignupArgs};

use super::*;

pub(super) fn handle_login_command(ctx: &mut UserContext, args: LoginArgs) -> Result<()> {
    let creds = Credentials {
        username: args.username,
        password: args.password,
    };
    let user = ctx.login(&creds).map_err(|err| api_error("login", err))?;
    println!("Logged in as {}", user.username);
    Ok(())
}

pub(super) fn handle_signup_command(ctx: &mut UserContext, args: SignupArgs) -> Result<()> {
    let data = SignupData {
        username: args.username,
        password: args.password,
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
    };
    let user = ctx.signup(&data).map_err(|err| api_error("signup", err))?;
    println!("Signed up as {}", user.username);
    Ok(())
}

pub(super) fn handle_logout_command(ctx: &mut UserContext) {
    ctx.logout();
    println!("Logged out");
}

pub(super) fn handle_whoami_command(ctx: &UserContext, json: bool) -> Result<()> {
    let user = ctx
        .current_user()
        .context("not signed in (run `jobly login`)")?;
    if json {
        print_json(user, "whoami")?;
    } else {
        println!("user: {}", user.username);
        println!("name: {}", user.display_name());
        println!("admin: {}", user.is_admin);
    }
    Ok(())
}

pub(super) fn handle_profile_command(ctx: &mut UserContext, command: ProfileCommands) -> Result<()> {
    require_signed_in(ctx, Route::Profile)?;
    match command {
        ProfileCommands::Show { json } => {
            let user = ctx
                .current_user()
                .context("not signed in (run `jobly login`)")?;
            if json {
                print_json(user, "profile")?;
            } else {
                for line in ProfileForm::from_user(user).lines(&user.username) {
                    println!("{}", line);
                }
                println!("applications: {}", user.applications.len());
            }
        }
        ProfileCommands::Update {
            first_name,
            last_name,
            email,
            password,
        } => {
            let update = ProfileUpdate {
                first_name,
                last_name,
                email,
                password: Some(password),
            };
            let user = ctx
                .update_profile(&update)
                .map_err(|err| api_error("update profile", err))?;
            println!("Updated profile for {}", user.username);
        }
    }
    Ok(())
}
