use std::io::{self, Read as _};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use signedcookie::codec::decode_tag;
use signedcookie::cookie::{set_cookie_header, CookieOptions};
use signedcookie::keys::{load_key_file, KeyMaterial};
use signedcookie::serialize::split_token;
use signedcookie::sign::Signer;

#[derive(Parser)]
#[command(name = "signedcookie", about = "Tamper-evident tokens for client-held values")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Where the signing key comes from.
#[derive(clap::Args)]
struct KeyArgs {
    /// Key file path: raw key bytes, or hex with --hex-key.
    #[arg(short, long, env = "SIGNEDCOOKIE_KEY_FILE")]
    key: PathBuf,

    /// Interpret the key file as hex-encoded.
    #[arg(long, default_value_t = false)]
    hex_key: bool,
}

impl KeyArgs {
    fn signer(&self) -> Result<Signer, Box<dyn std::error::Error>> {
        Ok(Signer::from_key_material(load_key_file(&self.key, self.hex_key)?))
    }
}

#[derive(Subcommand)]
enum Command {
    /// Generate a new random key and print it as hex.
    GenerateKey,

    /// Sign a payload and print the token.
    Sign {
        #[command(flatten)]
        key: KeyArgs,

        /// Payload to sign. If omitted, reads from stdin.
        #[arg(short, long)]
        payload: Option<String>,
    },

    /// Verify a token and print its payload as JSON.
    Verify {
        #[command(flatten)]
        key: KeyArgs,

        /// Token to verify. If omitted, reads from stdin.
        #[arg(short, long)]
        token: Option<String>,
    },

    /// Sign a value and print a Set-Cookie header value carrying it.
    Cookie {
        #[command(flatten)]
        key: KeyArgs,

        /// Cookie name.
        #[arg(short, long)]
        name: String,

        /// Cookie value (must consist of cookie-safe characters).
        #[arg(short, long)]
        value: String,

        /// Cookie lifetime (e.g. "1h", "30m", "7days").
        #[arg(long)]
        max_age: Option<humantime::Duration>,

        /// Absolute expiry as an RFC 3339 timestamp (e.g. "2030-01-01T00:00:00Z").
        #[arg(long)]
        expires: Option<humantime::Timestamp>,

        #[arg(long, default_value = "/")]
        path: String,

        #[arg(long)]
        domain: Option<String>,

        /// Add the Secure attribute.
        #[arg(long, default_value_t = false)]
        secure: bool,

        /// Omit the HttpOnly attribute.
        #[arg(long, default_value_t = false)]
        allow_script_access: bool,
    },

    /// Split a token into payload and tag without verifying it.
    Inspect {
        /// Token to inspect. If omitted, reads from stdin.
        #[arg(short, long)]
        token: Option<String>,
    },
}

#[derive(serde::Serialize)]
struct VerifyOutput<'a> {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload_hex: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::GenerateKey => cmd_generate_key(),
        Command::Sign { key, payload } => cmd_sign(&key, payload),
        Command::Verify { key, token } => cmd_verify(&key, token),
        Command::Cookie {
            key,
            name,
            value,
            max_age,
            expires,
            path,
            domain,
            secure,
            allow_script_access,
        } => {
            let options = CookieOptions {
                max_age: max_age.map(Into::into),
                expires: expires.map(|t| std::time::SystemTime::from(t).into()),
                path: Some(path),
                domain,
                secure,
                http_only: !allow_script_access,
            };
            cmd_cookie(&key, &name, &value, &options)
        }
        Command::Inspect { token } => cmd_inspect(token),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_generate_key() -> Result<bool, Box<dyn std::error::Error>> {
    let key = KeyMaterial::generate()?;
    println!("{}", key.to_hex().as_str());
    Ok(true)
}

fn cmd_sign(key: &KeyArgs, payload: Option<String>) -> Result<bool, Box<dyn std::error::Error>> {
    let signer = key.signer()?;
    let payload = read_arg_or_stdin(payload)?;
    println!("{}", signer.sign_str(&payload));
    Ok(true)
}

fn cmd_verify(key: &KeyArgs, token: Option<String>) -> Result<bool, Box<dyn std::error::Error>> {
    let signer = key.signer()?;
    let token = read_arg_or_stdin(token)?;

    let output = match signer.verify(token.as_bytes()) {
        Ok(payload) => match std::str::from_utf8(payload) {
            Ok(text) => VerifyOutput {
                valid: true,
                payload: Some(text),
                payload_hex: None,
            },
            Err(_) => VerifyOutput {
                valid: true,
                payload: None,
                payload_hex: Some(hex::encode(payload)),
            },
        },
        Err(_) => VerifyOutput {
            valid: false,
            payload: None,
            payload_hex: None,
        },
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(output.valid)
}

fn cmd_cookie(
    key: &KeyArgs,
    name: &str,
    value: &str,
    options: &CookieOptions,
) -> Result<bool, Box<dyn std::error::Error>> {
    let signer = key.signer()?;
    println!("{}", set_cookie_header(&signer, name, value.as_bytes(), options)?);
    Ok(true)
}

fn cmd_inspect(token: Option<String>) -> Result<bool, Box<dyn std::error::Error>> {
    let token = read_arg_or_stdin(token)?;
    let parts = split_token(token.as_bytes()).ok_or("token shorter than an encoded tag")?;

    let tag = decode_tag(parts.encoded_tag);
    let output = serde_json::json!({
        "payload": String::from_utf8_lossy(parts.payload),
        "payload_len": parts.payload.len(),
        "encoded_tag": String::from_utf8_lossy(parts.encoded_tag),
        "tag_hex": tag.as_ref().ok().map(hex::encode),
        "tag_error": tag.as_ref().err().map(ToString::to_string),
        "total_bytes": parts.len(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(true)
}

/// Use the CLI argument verbatim if given, otherwise read stdin and drop
/// its trailing line ending.
fn read_arg_or_stdin(arg: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    match arg {
        Some(s) => Ok(s),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(strip_line_ending(buf))
        }
    }
}

fn strip_line_ending(mut s: String) -> String {
    if s.ends_with('\n') {
        s.pop();
        if s.ends_with('\r') {
            s.pop();
        }
    }
    s
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_kept_verbatim() {
        let arg = read_arg_or_stdin(Some("  padded value \t".into())).unwrap();
        assert_eq!(arg, "  padded value \t");
    }

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending(" a\n".into()), " a");
        assert_eq!(strip_line_ending(" a\r\n".into()), " a");
        assert_eq!(strip_line_ending(" a \n\n".into()), " a \n");
        assert_eq!(strip_line_ending(" a ".into()), " a ");
        assert_eq!(strip_line_ending(String::new()), "");
    }
}
