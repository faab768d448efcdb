//! Forwarded commands: `<domain> <operation> [resource-type] [name] [flags...]`
//! checked against the registry and handed to an executor.

use super::parse::is_flag;
use super::result::ExecutionResult;
use crate::catalog::Operation;
use crate::error::ShellError;
use crate::registry::Registry;
use serde::Serialize;
use std::sync::Arc;

/// A command resolved against the registry, ready for execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForwardedCommand {
    /// Canonical domain name
    pub domain: String,
    /// Verb as typed (`update` and `apply` map onto an operation); `None`
    /// for a flags-only line such as `dns --help`
    pub verb: Option<String>,
    pub operation: Option<Operation>,
    /// Canonical resource type name
    pub resource: Option<String>,
    pub name: Option<String>,
    /// Flag tokens and their values, in input order
    pub flags: Vec<String>,
}

/// Operation a verb requires of the resource type.
pub fn operation_for_verb(verb: &str) -> Option<Operation> {
    match verb {
        "apply" => Some(Operation::Create),
        _ => Operation::from_verb(verb),
    }
}

impl ForwardedCommand {
    /// Resolve full command tokens (context prefix already applied).
    pub fn resolve(registry: &Registry, args: &[String]) -> Result<Self, ShellError> {
        let split = args.iter().position(|a| is_flag(a)).unwrap_or(args.len());
        let (positional, flags) = args.split_at(split);

        let mut positional = positional.iter();
        let token = positional
            .next()
            .ok_or_else(|| ShellError::InvalidCommand("empty command".to_string()))?;
        let domain = registry
            .resolve_domain(token)
            .ok_or_else(|| ShellError::UnknownDomain(token.clone()))?
            .to_string();

        let Some(verb) = positional.next() else {
            if flags.is_empty() {
                return Err(ShellError::InvalidCommand(format!(
                    "missing operation for domain '{}'",
                    domain
                )));
            }
            return Ok(Self {
                domain,
                verb: None,
                operation: None,
                resource: None,
                name: None,
                flags: flags.to_vec(),
            });
        };
        let operation = operation_for_verb(verb)
            .ok_or_else(|| ShellError::InvalidCommand(format!("unknown operation '{}'", verb)))?;

        let resource = match positional.next() {
            Some(token) => {
                let rt = registry.resource(token).ok_or_else(|| {
                    ShellError::InvalidCommand(format!("unknown resource type '{}'", token))
                })?;
                if !rt.domains.contains(&domain) {
                    return Err(ShellError::InvalidCommand(format!(
                        "resource '{}' is not available in domain '{}'",
                        rt.name, domain
                    )));
                }
                if !rt.operations.contains(operation) {
                    return Err(ShellError::InvalidCommand(format!(
                        "resource '{}' does not support '{}'",
                        rt.name, verb
                    )));
                }
                Some(rt.name.clone())
            }
            None => None,
        };

        let name = positional.next().cloned();
        if let Some(extra) = positional.next() {
            return Err(ShellError::InvalidCommand(format!(
                "unexpected argument '{}'",
                extra
            )));
        }

        Ok(Self {
            domain,
            verb: Some(verb.clone()),
            operation: Some(operation),
            resource,
            name,
            flags: flags.to_vec(),
        })
    }

    /// Value of `-n`/`--namespace`, in either spaced or `=` form.
    pub fn namespace(&self) -> Option<&str> {
        let mut flags = self.flags.iter();
        while let Some(flag) = flags.next() {
            if flag == "-n" || flag == "--namespace" {
                return flags.next().map(String::as_str);
            }
            if let Some(value) = flag
                .strip_prefix("--namespace=")
                .or_else(|| flag.strip_prefix("-n="))
            {
                return Some(value);
            }
        }
        None
    }

    /// Append `-n <namespace>` when no namespace flag was given and the
    /// resource type is namespace-scoped.
    pub fn apply_default_namespace(&mut self, registry: &Registry, namespace: &str) {
        if namespace.is_empty() || self.namespace().is_some() {
            return;
        }
        let scoped = self
            .resource
            .as_deref()
            .and_then(|r| registry.resource(r))
            .map(|rt| rt.supports_namespace)
            .unwrap_or(false);
        if scoped {
            self.flags.push("-n".to_string());
            self.flags.push(namespace.to_string());
        }
    }

    pub fn command_line(&self) -> String {
        let mut parts = vec![self.domain.as_str()];
        parts.extend(self.verb.as_deref());
        parts.extend(self.resource.as_deref());
        parts.extend(self.name.as_deref());
        parts.extend(self.flags.iter().map(String::as_str));
        parts.join(" ")
    }
}

/// Executes forwarded commands. The network-facing implementation lives
/// outside this crate.
pub trait CommandExecutor {
    fn execute(&mut self, command: &ForwardedCommand) -> ExecutionResult;
}

/// Executor that reports what would run instead of calling the API.
#[derive(Debug, Clone)]
pub struct DryRunExecutor {
    registry: Arc<Registry>,
}

impl DryRunExecutor {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }
}

impl CommandExecutor for DryRunExecutor {
    fn execute(&mut self, command: &ForwardedCommand) -> ExecutionResult {
        let mut result =
            ExecutionResult::line(format!("would run: xcsh {}", command.command_line()));
        let rt = command.resource.as_deref().and_then(|r| self.registry.resource(r));
        if let (Some(rt), Some(operation)) = (rt, command.operation) {
            let path = rt.api_path_for(command.namespace(), command.name.as_deref());
            result = result.with_line(format!("  {} {}", operation, path));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_resolve_full_command() {
        let registry = builtin::catalog().into_registry().unwrap();
        let cmd = ForwardedCommand::resolve(
            &registry,
            &args("lb get http_loadbalancer web -n prod --output json"),
        )
        .unwrap();
        assert_eq!(cmd.domain, "load_balancer");
        assert_eq!(cmd.operation, Some(Operation::Get));
        assert_eq!(cmd.resource.as_deref(), Some("http_loadbalancer"));
        assert_eq!(cmd.name.as_deref(), Some("web"));
        assert_eq!(cmd.namespace(), Some("prod"));
        assert_eq!(
            cmd.command_line(),
            "load_balancer get http_loadbalancer web -n prod --output json"
        );
    }

    #[test]
    fn test_resolve_cli_name_and_cross_domain() {
        let registry = builtin::catalog().into_registry().unwrap();
        let cmd =
            ForwardedCommand::resolve(&registry, &args("security list http-loadbalancer")).unwrap();
        assert_eq!(cmd.resource.as_deref(), Some("http_loadbalancer"));
        assert_eq!(cmd.domain, "security");
    }

    #[test]
    fn test_resolve_errors() {
        let registry = builtin::catalog().into_registry().unwrap();
        assert_eq!(
            ForwardedCommand::resolve(&registry, &args("nope list")).unwrap_err(),
            ShellError::UnknownDomain("nope".into())
        );
        assert!(matches!(
            ForwardedCommand::resolve(&registry, &args("dns")).unwrap_err(),
            ShellError::InvalidCommand(_)
        ));
        assert!(ForwardedCommand::resolve(&registry, &args("dns frob")).is_err());
        assert!(ForwardedCommand::resolve(&registry, &args("dns list http_loadbalancer")).is_err());
        assert!(ForwardedCommand::resolve(&registry, &args("dns list no_such_type")).is_err());
        assert!(ForwardedCommand::resolve(&registry, &args("statistics delete flow")).is_err());
        assert!(ForwardedCommand::resolve(&registry, &args("dns get dns_zone a b")).is_err());
    }

    #[test]
    fn test_update_and_apply_verbs() {
        let registry = builtin::catalog().into_registry().unwrap();
        let cmd = ForwardedCommand::resolve(&registry, &args("dns update dns_zone")).unwrap();
        assert_eq!(cmd.operation, Some(Operation::Replace));
        assert_eq!(cmd.verb.as_deref(), Some("update"));
        let cmd = ForwardedCommand::resolve(&registry, &args("dns apply dns_zone --file z.yaml"))
            .unwrap();
        assert_eq!(cmd.operation, Some(Operation::Create));
    }

    #[test]
    fn test_dry_run_executor() {
        let registry = Arc::new(builtin::catalog().into_registry().unwrap());
        let cmd = ForwardedCommand::resolve(
            &registry,
            &args("lb get http_loadbalancer web --namespace=prod"),
        )
        .unwrap();
        let result = DryRunExecutor::new(Arc::clone(&registry)).execute(&cmd);
        assert_eq!(
            result.output_lines[0],
            "would run: xcsh load_balancer get http_loadbalancer web --namespace=prod"
        );
        assert_eq!(
            result.output_lines[1],
            "  get /api/config/namespaces/prod/http_loadbalancers/web"
        );
    }

    #[test]
    fn test_flags_only_line_resolves_without_operation() {
        let registry = builtin::catalog().into_registry().unwrap();
        let cmd = ForwardedCommand::resolve(&registry, &args("lb --help")).unwrap();
        assert_eq!(cmd.domain, "load_balancer");
        assert_eq!(cmd.verb, None);
        assert_eq!(cmd.operation, None);
        assert_eq!(cmd.command_line(), "load_balancer --help");

        let result = DryRunExecutor::new(Arc::new(registry)).execute(&cmd);
        assert_eq!(result.output_lines, vec!["would run: xcsh load_balancer --help"]);
    }

    #[test]
    fn test_apply_default_namespace() {
        let registry = builtin::catalog().into_registry().unwrap();

        let mut cmd =
            ForwardedCommand::resolve(&registry, &args("lb get http_loadbalancer web")).unwrap();
        cmd.apply_default_namespace(&registry, "staging");
        assert_eq!(cmd.flags, vec!["-n", "staging"]);
        assert_eq!(cmd.namespace(), Some("staging"));

        let mut explicit =
            ForwardedCommand::resolve(&registry, &args("lb get http_loadbalancer web -n=prod"))
                .unwrap();
        explicit.apply_default_namespace(&registry, "staging");
        assert_eq!(explicit.flags, vec!["-n=prod"]);

        let mut no_resource = ForwardedCommand::resolve(&registry, &args("lb list")).unwrap();
        no_resource.apply_default_namespace(&registry, "staging");
        assert!(no_resource.flags.is_empty());
    }
}
