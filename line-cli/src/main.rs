use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use line_authorizer::{Authorizer, IdTokenClaims, LineClient, LineClientConfig};
use tracing_subscriber::EnvFilter;

/// Look up a LINE user's name from a LINE Login token.
///
/// - `id-token`: verify-id-token で検証し、name を表示
/// - `access-token`: verify-access-token → client_id 照合 → get-user-profile で displayName を表示
#[derive(Parser, Debug)]
#[command(name = "line-cli", version, about)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// LINE Login channel id (https://developers.line.biz/ja/reference/line-login/#verify-id-token)
    #[arg(long, env = "LINE_CHANNEL_ID")]
    channel_id: String,

    /// Override the LINE API base URL (e.g. a local mock)
    #[arg(long, env = "LINE_API_BASE_URL")]
    base_url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Print the full verification result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Verify an ID token and print the user's name
    IdToken {
        #[arg(long)]
        id_token: String,

        /// Expected nonce (sent only when given)
        #[arg(long)]
        nonce: Option<String>,

        /// Expected user id (sent only when given)
        #[arg(long)]
        user_id: Option<String>,
    },
    /// Verify an access token, fetch the profile and print the display name
    AccessToken {
        #[arg(long)]
        access_token: String,
    },
}

fn build_authorizer(args: &CommonArgs) -> Result<Authorizer> {
    let mut config = LineClientConfig::new(args.channel_id.clone()).with_http_timeout(args.timeout);
    if let Some(base_url) = &args.base_url {
        config = config
            .with_base_url(base_url)
            .with_context(|| format!("invalid --base-url {base_url}"))?;
    }

    let client = LineClient::new(config).context("failed to build LINE client")?;
    Ok(Authorizer::from_client(client))
}

fn render_id_token(claims: &IdTokenClaims, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(claims)?);
    }
    Ok(format!(
        "LINE User Name {}",
        claims.name.as_deref().unwrap_or_default()
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let authorizer = build_authorizer(&cli.common)?;

    match cli.command {
        Command::IdToken {
            id_token,
            nonce,
            user_id,
        } => {
            let claims = authorizer
                .verify_id_token(&id_token, user_id.as_deref(), nonce.as_deref())
                .await
                .context("id token verification failed")?;

            if let Some(expires_at) = claims.expires_at() {
                tracing::info!(%expires_at, "id token expiry");
            }
            println!("{}", render_id_token(&claims, cli.common.json)?);
        }
        Command::AccessToken { access_token } => {
            let profile = authorizer
                .verify_access_token(&access_token)
                .await
                .context("access token verification failed")?;

            if cli.common.json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                println!("LINE User Name {}", profile.display_name);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_id_token_command() {
        let cli = Cli::try_parse_from([
            "line-cli",
            "--channel-id",
            "1234567890",
            "id-token",
            "--id-token",
            "eyJ...",
            "--nonce",
            "n-0S6_WzA2Mj",
        ])
        .unwrap();

        assert_eq!(cli.common.channel_id, "1234567890");
        assert!(matches!(
            cli.command,
            Command::IdToken { ref nonce, ref user_id, .. }
                if nonce.as_deref() == Some("n-0S6_WzA2Mj") && user_id.is_none()
        ));
    }

    fn claims(name: Option<&str>) -> IdTokenClaims {
        IdTokenClaims {
            iss: "https://access.line.me".into(),
            sub: "U123".into(),
            aud: "1234567890".into(),
            exp: 1504169092,
            iat: None,
            nonce: None,
            amr: Vec::new(),
            name: name.map(Into::into),
            picture: None,
            email: None,
        }
    }

    #[test]
    fn renders_user_name_and_keeps_claims_usable() {
        let claims = claims(Some("Alice"));

        assert_eq!(
            render_id_token(&claims, false).unwrap(),
            "LINE User Name Alice"
        );
        assert_eq!(claims.expires_at().map(|t| t.timestamp()), Some(1504169092));
    }

    #[test]
    fn renders_missing_name_as_empty() {
        assert_eq!(
            render_id_token(&claims(None), false).unwrap(),
            "LINE User Name "
        );
    }

    #[test]
    fn renders_claims_as_json() {
        let out = render_id_token(&claims(Some("Alice")), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["sub"], "U123");
        assert_eq!(value["name"], "Alice");
    }

    #[test]
    fn invalid_base_url_is_reported() {
        let args = CommonArgs {
            channel_id: "1234567890".into(),
            base_url: Some("not a url".into()),
            timeout: 30,
            json: false,
        };

        assert!(build_authorizer(&args).is_err());
    }
}
