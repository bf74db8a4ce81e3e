//! `go.mod` parser.

use crate::manifest::lexer::{tokenize, Token};
use crate::manifest::ManifestError;
use bstr::ByteSlice;
use tracing::debug;

/// A module path paired with a required version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleVersion {
    pub path: String,
    pub version: String,
}

/// A module path with an optional version, as used on either side of a `replace`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRef {
    pub path: String,
    pub version: Option<String>,
}

/// A `replace old [v] => new [v]` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub old: ModuleRef,
    pub new: ModuleRef,
}

/// A retracted version range. A single retracted version has `low == high`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Retraction {
    pub low: String,
    pub high: String,
}

/// A `godebug key=value` setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoDebug {
    pub key: String,
    pub value: String,
}

/// Parsed contents of a `go.mod` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    /// The declared module path.
    pub module: String,
    pub go: Option<String>,
    pub toolchain: Option<String>,
    pub requires: Vec<ModuleVersion>,
    pub excludes: Vec<ModuleVersion>,
    pub replaces: Vec<Replacement>,
    pub retracts: Vec<Retraction>,
    pub godebugs: Vec<GoDebug>,
    pub tools: Vec<String>,
    pub ignores: Vec<String>,
}

/// Directive verbs recognised in a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Module,
    Go,
    Toolchain,
    GoDebug,
    Require,
    Exclude,
    Replace,
    Retract,
    Tool,
    Ignore,
}

impl Verb {
    fn from_word(word: &str) -> Option<Self> {
        Some(match word {
            "module" => Verb::Module,
            "go" => Verb::Go,
            "toolchain" => Verb::Toolchain,
            "godebug" => Verb::GoDebug,
            "require" => Verb::Require,
            "exclude" => Verb::Exclude,
            "replace" => Verb::Replace,
            "retract" => Verb::Retract,
            "tool" => Verb::Tool,
            "ignore" => Verb::Ignore,
            _ => return None,
        })
    }

    fn as_str(self) -> &'static str {
        match self {
            Verb::Module => "module",
            Verb::Go => "go",
            Verb::Toolchain => "toolchain",
            Verb::GoDebug => "godebug",
            Verb::Require => "require",
            Verb::Exclude => "exclude",
            Verb::Replace => "replace",
            Verb::Retract => "retract",
            Verb::Tool => "tool",
            Verb::Ignore => "ignore",
        }
    }

    fn allows_block(self) -> bool {
        !matches!(self, Verb::Go | Verb::Toolchain)
    }
}

/// Parses the raw bytes of a `go.mod` file.
///
/// # Errors
///
/// Returns [`ManifestError::ParseError`] if the content is not valid UTF-8,
/// contains an unknown or malformed directive, or lacks a `module` directive.
pub fn parse_manifest(content: &[u8]) -> Result<Manifest, ManifestError> {
    let mut manifest = Manifest::default();
    let mut module_seen = false;
    let mut block: Option<(Verb, usize)> = None;
    let mut last_line = 0;

    for (index, raw) in content.lines().enumerate() {
        let line_no = index + 1;
        last_line = line_no;

        let line = raw
            .to_str()
            .map_err(|e| ManifestError::parse(line_no, format!("invalid UTF-8: {e}")))?;
        let tokens = tokenize(line, line_no)?;
        if tokens.is_empty() {
            continue;
        }

        if let Some((verb, _)) = block {
            if tokens == [Token::Punct(')')] {
                block = None;
            } else {
                apply(&mut manifest, &mut module_seen, verb, &tokens, line_no)?;
            }
            continue;
        }

        let Some(word) = tokens[0].as_word() else {
            return Err(ManifestError::parse(line_no, "unexpected token at start of line"));
        };
        let Some(verb) = Verb::from_word(word) else {
            return Err(ManifestError::parse(line_no, format!("unknown directive: {word}")));
        };

        let args = &tokens[1..];
        match args {
            [Token::Punct('(')] | [Token::Punct('('), Token::Punct(')')] => {
                if !verb.allows_block() {
                    return Err(ManifestError::parse(
                        line_no,
                        format!("{} directive cannot be used as a block", verb.as_str()),
                    ));
                }
                if args.len() == 1 {
                    block = Some((verb, line_no));
                }
            }
            _ => apply(&mut manifest, &mut module_seen, verb, args, line_no)?,
        }
    }

    if let Some((verb, opened_at)) = block {
        return Err(ManifestError::parse(
            last_line,
            format!(
                "unterminated {} block opened at line {opened_at}",
                verb.as_str()
            ),
        ));
    }

    if !module_seen {
        return Err(ManifestError::parse(last_line, "missing module directive"));
    }

    debug!(
        module = %manifest.module,
        requires = manifest.requires.len(),
        replaces = manifest.replaces.len(),
        "Parsed manifest"
    );
    Ok(manifest)
}

/// Applies one directive (or block entry) to the manifest.
fn apply(
    manifest: &mut Manifest,
    module_seen: &mut bool,
    verb: Verb,
    args: &[Token],
    line_no: usize,
) -> Result<(), ManifestError> {
    match verb {
        Verb::Module => {
            let [path] = words::<1>(verb, args, line_no)?;
            if *module_seen {
                return Err(ManifestError::parse(line_no, "repeated module statement"));
            }
            *module_seen = true;
            manifest.module = path;
        }
        Verb::Go => {
            let [version] = words::<1>(verb, args, line_no)?;
            if !is_go_version(&version) {
                return Err(ManifestError::parse(
                    line_no,
                    format!("invalid go version '{version}': must match format 1.23.0"),
                ));
            }
            if manifest.go.is_some() {
                return Err(ManifestError::parse(line_no, "repeated go statement"));
            }
            manifest.go = Some(version);
        }
        Verb::Toolchain => {
            let [name] = words::<1>(verb, args, line_no)?;
            if !is_toolchain(&name) {
                return Err(ManifestError::parse(
                    line_no,
                    format!("invalid toolchain name '{name}'"),
                ));
            }
            if manifest.toolchain.is_some() {
                return Err(ManifestError::parse(line_no, "repeated toolchain statement"));
            }
            manifest.toolchain = Some(name);
        }
        Verb::GoDebug => {
            let [setting] = words::<1>(verb, args, line_no)?;
            let Some((key, value)) = setting.split_once('=').filter(|(k, _)| !k.is_empty())
            else {
                return Err(ManifestError::parse(line_no, "usage: godebug key=value"));
            };
            manifest.godebugs.push(GoDebug {
                key: key.to_string(),
                value: value.to_string(),
            });
        }
        Verb::Require | Verb::Exclude => {
            let [path, version] = words::<2>(verb, args, line_no)?;
            check_version(&version, line_no)?;
            let entry = ModuleVersion { path, version };
            if verb == Verb::Require {
                manifest.requires.push(entry);
            } else {
                manifest.excludes.push(entry);
            }
        }
        Verb::Replace => manifest.replaces.push(replacement(args, line_no)?),
        Verb::Retract => manifest.retracts.push(retraction(args, line_no)?),
        Verb::Tool => {
            let [path] = words::<1>(verb, args, line_no)?;
            manifest.tools.push(path);
        }
        Verb::Ignore => {
            let [path] = words::<1>(verb, args, line_no)?;
            manifest.ignores.push(path);
        }
    }

    Ok(())
}

/// Extracts exactly `N` word arguments.
fn words<const N: usize>(
    verb: Verb,
    args: &[Token],
    line_no: usize,
) -> Result<[String; N], ManifestError> {
    let usage = || {
        ManifestError::parse(
            line_no,
            format!(
                "{} directive expects {} argument{}",
                verb.as_str(),
                N,
                if N == 1 { "" } else { "s" }
            ),
        )
    };

    if args.len() != N {
        return Err(usage());
    }

    let mut out: [String; N] = std::array::from_fn(|_| String::new());
    for (slot, token) in out.iter_mut().zip(args) {
        *slot = token.as_word().ok_or_else(usage)?.to_string();
    }
    Ok(out)
}

fn module_ref(tokens: &[Token], line_no: usize) -> Result<ModuleRef, ManifestError> {
    let invalid = || {
        ManifestError::parse(
            line_no,
            "usage: replace module/path [v1.2.3] => other/module v1.4",
        )
    };
    match tokens {
        [path] => Ok(ModuleRef {
            path: path.as_word().ok_or_else(invalid)?.to_string(),
            version: None,
        }),
        [path, version] => {
            let version = version.as_word().ok_or_else(invalid)?;
            check_version(version, line_no)?;
            Ok(ModuleRef {
                path: path.as_word().ok_or_else(invalid)?.to_string(),
                version: Some(version.to_string()),
            })
        }
        _ => Err(invalid()),
    }
}

fn replacement(args: &[Token], line_no: usize) -> Result<Replacement, ManifestError> {
    let Some(arrow) = args.iter().position(|t| *t == Token::Arrow) else {
        return Err(ManifestError::parse(line_no, "replace directive is missing '=>'"));
    };

    Ok(Replacement {
        old: module_ref(&args[..arrow], line_no)?,
        new: module_ref(&args[arrow + 1..], line_no)?,
    })
}

fn retraction(args: &[Token], line_no: usize) -> Result<Retraction, ManifestError> {
    let (low, high) = match args {
        [Token::Word(version)] => (version.clone(), version.clone()),
        [Token::Punct('['), Token::Word(low), Token::Punct(','), Token::Word(high), Token::Punct(']')] => {
            (low.clone(), high.clone())
        }
        _ => {
            return Err(ManifestError::parse(
                line_no,
                "usage: retract version or retract [low, high]",
            ));
        }
    };

    check_version(&low, line_no)?;
    check_version(&high, line_no)?;
    Ok(Retraction { low, high })
}

fn check_version(version: &str, line_no: usize) -> Result<(), ManifestError> {
    if is_semver(version) {
        Ok(())
    } else {
        Err(ManifestError::parse(
            line_no,
            format!("invalid version '{version}': must be of the form v1.2.3"),
        ))
    }
}

/// Numeric identifier without leading zeros.
fn is_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) && (s == "0" || !s.starts_with('0'))
}

/// Dot-separated pre-release identifiers; numeric ones may not have leading zeros.
fn is_prerelease(s: &str) -> bool {
    s.split('.').all(|part| {
        let alphanumeric = !part.is_empty()
            && part.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-');
        let numeric = part.bytes().all(|b| b.is_ascii_digit());
        alphanumeric && (!numeric || is_number(part))
    })
}

/// Checks for a canonical semantic version `vMAJOR.MINOR.PATCH[-pre][+incompatible]`.
///
/// Build metadata other than `+incompatible` is not canonical.
fn is_semver(version: &str) -> bool {
    let Some(rest) = version.strip_prefix('v') else {
        return false;
    };

    let (rest, build) = match rest.split_once('+') {
        Some((rest, build)) => (rest, Some(build)),
        None => (rest, None),
    };
    let (core, pre) = match rest.split_once('-') {
        Some((core, pre)) => (core, Some(pre)),
        None => (rest, None),
    };

    let mut parts = core.split('.');
    let core_ok = (0..3).all(|_| parts.next().is_some_and(is_number)) && parts.next().is_none();

    core_ok && pre.map_or(true, is_prerelease) && build.map_or(true, |b| b == "incompatible")
}

/// Checks for a toolchain name: `default`, `go1` or `go1.` followed by anything.
fn is_toolchain(name: &str) -> bool {
    name == "default"
        || name
            .strip_prefix("go1")
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
}

/// Checks for a Go language version such as `1.21`, `1.21.3` or `1.22rc1`.
fn is_go_version(version: &str) -> bool {
    let numeric_end = version
        .find(|c: char| c.is_ascii_lowercase())
        .unwrap_or(version.len());
    let (numbers, suffix) = version.split_at(numeric_end);

    let parts: Vec<&str> = numbers.split('.').collect();
    let numbers_ok = matches!(parts.len(), 2 | 3)
        && parts.iter().all(|p| is_number(p))
        && parts[0] != "0";

    let suffix_ok = suffix.is_empty() || {
        let digits_at = suffix
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(suffix.len());
        let (letters, digits) = suffix.split_at(digits_at);
        !letters.is_empty()
            && letters.bytes().all(|b| b.is_ascii_lowercase())
            && !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
    };

    numbers_ok && suffix_ok
}
