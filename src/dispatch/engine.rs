//! The dispatch pipeline.
//!
//! Per invocation: local verbs short-circuit, then the package name is
//! checked, managers are resolved, the primary index is refreshed when the
//! verb needs it, and the verb runs on the primary or on every manager.
//!
//! The `install` already-present check runs between resolution and the
//! index refresh, so a package that is already on `PATH` spawns nothing.

use crate::catalog::{Catalog, ManagerDescriptor, Operation};
use crate::config::Settings;
use crate::detection::{DetectionContext, ManagerResolver, Probe, Resolution, GENERIC_NAME};
use crate::error::{InstallerError, Result};
use crate::shell::{ExecutionRequest, Executor};
use crate::template::{render, validate_package_name};
use crate::ui::UserInterface;
use crate::updates::SelfManager;

use super::action::Action;
use super::result::{CommandResult, FanOutReport};

/// Runs one [`Action`] against the host.
pub struct Dispatcher<'a> {
    catalog: Catalog,
    settings: &'a Settings,
    context: DetectionContext,
    probe: &'a dyn Probe,
    executor: &'a mut dyn Executor,
    self_manager: &'a mut dyn SelfManager,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        settings: &'a Settings,
        context: DetectionContext,
        probe: &'a dyn Probe,
        executor: &'a mut dyn Executor,
        self_manager: &'a mut dyn SelfManager,
    ) -> Self {
        Self {
            catalog: Catalog::builtin(),
            settings,
            context,
            probe,
            executor,
            self_manager,
        }
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Run `action`.
    ///
    /// Errors are single-target failures; `main` reports them and exits 1.
    /// Fan-out failures are reported here and come back as a failed
    /// [`CommandResult`].
    pub fn dispatch(
        &mut self,
        action: &Action,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        tracing::debug!(
            "dispatching {:?} (resolves managers: {})",
            action,
            action.needs_resolution()
        );

        if action.requires_package() && action.package().is_none() {
            ui.message(&usage(action.verb()));
            return Ok(CommandResult::success());
        }

        match action {
            Action::Unknown(verb) => {
                return Err(InstallerError::UnsupportedVerb { verb: verb.clone() })
            }
            Action::Reinstall(_) => {
                return Err(InstallerError::UnsupportedVerb {
                    verb: "reinstall".to_string(),
                })
            }
            Action::PmList => {
                self.list_catalog(ui);
                return Ok(CommandResult::success());
            }
            Action::SelfUpdate => {
                self.self_manager.self_update(ui, &mut *self.executor)?;
                return Ok(CommandResult::success());
            }
            Action::SelfUninstall => {
                let removed = self.self_manager.self_uninstall(ui, &mut *self.executor)?;
                return Ok(if removed {
                    CommandResult::success()
                } else {
                    CommandResult::failure(1)
                });
            }
            _ => {}
        }

        if let Some(package) = action.package() {
            validate_package_name(package)?;
        }

        let resolution = ManagerResolver::new(self.catalog, self.probe).resolve(&self.context)?;

        if let Action::Pms = action {
            self.list_detected(&resolution, ui);
            return Ok(CommandResult::success());
        }

        if let Action::Install(Some(package)) = action {
            if self.probe.is_available(package) {
                ui.success(&format!("'{}' is already installed", package));
                return Ok(CommandResult::success());
            }
        }

        let primary = self.catalog.lookup(&resolution.primary.id)?;
        if action.refreshes_index() {
            self.refresh_index(primary, ui)?;
        }

        let Some(operation) = action.operation() else {
            return Err(InstallerError::UnsupportedVerb {
                verb: action.verb().to_string(),
            });
        };

        if action.fans_out() {
            let report = self.fan_out(operation, &resolution, ui)?;
            return Ok(report.into_command_result());
        }

        let package = action.package().unwrap_or_default();
        self.run_single(primary, operation, package)?;
        Ok(CommandResult::success())
    }

    /// Run `operation` on one manager. Any failure is an error.
    fn run_single(
        &mut self,
        descriptor: &ManagerDescriptor,
        operation: Operation,
        package: &str,
    ) -> Result<()> {
        let template = descriptor.require_template(operation)?;
        let request = self.request(template.command, template.privileged, package);
        self.executor.run_checked(&request)
    }

    /// Run `operation` on every resolved manager, in order.
    ///
    /// One manager's failure is recorded and the loop continues. Missing
    /// escalation aborts the loop.
    fn fan_out(
        &mut self,
        operation: Operation,
        resolution: &Resolution,
        ui: &mut dyn UserInterface,
    ) -> Result<FanOutReport> {
        let mut report = FanOutReport::default();

        for manager in &resolution.all {
            let descriptor = self.catalog.lookup(&manager.id)?;
            let Some(template) = descriptor.template(operation).copied() else {
                ui.warning(&format!(
                    "'{}' does not support '{}', skipping",
                    manager.id, operation
                ));
                report.skipped.push(manager.id.clone());
                continue;
            };

            ui.show_header(&manager.id);

            // The primary was refreshed before the loop.
            if operation == Operation::UpgradeAll && !resolution.is_primary(&manager.id) {
                self.refresh_index(descriptor, ui)?;
            }

            let request = self.request(template.command, template.privileged, "");
            match self.executor.run(&request) {
                Ok(outcome) if outcome.success => report.succeeded.push(manager.id.clone()),
                Ok(outcome) => {
                    let err = InstallerError::CommandFailed {
                        command: request.display(),
                        code: outcome.code,
                    };
                    ui.error(&err.to_string());
                    report.failed.push(manager.id.clone());
                }
                Err(e @ InstallerError::NoPrivilegeEscalationTool { .. }) => return Err(e),
                Err(e) => {
                    ui.error(&e.to_string());
                    report.failed.push(manager.id.clone());
                }
            }
        }

        if report.is_success() {
            ui.info(&format!(
                "{} finished for: {}",
                operation,
                report.succeeded.join(", ")
            ));
        } else {
            ui.error(&format!(
                "{} failed for: {}",
                operation,
                report.failed.join(", ")
            ));
        }

        Ok(report)
    }

    /// Best-effort index refresh. Only missing escalation is an error.
    fn refresh_index(
        &mut self,
        descriptor: &ManagerDescriptor,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let Some(template) = descriptor.template(Operation::UpdateIndex).copied() else {
            return Ok(());
        };

        let request = self.request(template.command, template.privileged, "");
        let failure = match self.executor.run(&request) {
            Ok(outcome) if outcome.success => return Ok(()),
            Ok(outcome) => InstallerError::CommandFailed {
                command: request.display(),
                code: outcome.code,
            },
            Err(e @ InstallerError::NoPrivilegeEscalationTool { .. }) => return Err(e),
            Err(e) => e,
        };

        tracing::warn!("index refresh for {} failed: {}", descriptor.id, failure);
        ui.warning(&format!(
            "index refresh for '{}' failed, continuing: {}",
            descriptor.id, failure
        ));
        Ok(())
    }

    fn request(&self, command: &str, privileged: bool, package: &str) -> ExecutionRequest {
        let argv = render(command, package);
        tracing::debug!("rendered '{}' -> {:?}", command, argv);
        ExecutionRequest::new(argv, privileged).quiet(self.settings.is_quiet())
    }

    fn list_catalog(&self, ui: &mut dyn UserInterface) {
        ui.message("supported package managers:");
        for id in self.catalog.ids().filter(|id| *id != GENERIC_NAME) {
            ui.message(&format!("  {}", id));
        }
    }

    fn list_detected(&self, resolution: &Resolution, ui: &mut dyn UserInterface) {
        ui.message("detected package managers:");
        for manager in &resolution.all {
            let marker = if resolution.is_primary(&manager.id) {
                " (primary)"
            } else {
                ""
            };
            ui.message(&format!(
                "  {} -> {}{}",
                manager.id,
                manager.executable_path.display(),
                marker
            ));
        }
    }
}

/// One-line usage for a verb that needs a package.
pub fn usage(verb: &str) -> String {
    format!("usage: {} {} <package>", GENERIC_NAME, verb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Template, Templates};
    use crate::detection::StaticProbe;
    use crate::shell::{Escalation, RecordingExecutor};
    use crate::ui::{MockUI, OutputMode};

    #[derive(Default)]
    struct FakeSelfManager {
        updates: usize,
        uninstall_answer: bool,
    }

    impl SelfManager for FakeSelfManager {
        fn self_update(
            &mut self,
            _ui: &mut dyn UserInterface,
            _executor: &mut dyn Executor,
        ) -> Result<()> {
            self.updates += 1;
            Ok(())
        }

        fn self_uninstall(
            &mut self,
            _ui: &mut dyn UserInterface,
            _executor: &mut dyn Executor,
        ) -> Result<bool> {
            Ok(self.uninstall_answer)
        }
    }

    /// apt (primary), snap and flatpak on Ubuntu.
    fn ubuntu_probe() -> StaticProbe {
        StaticProbe::new()
            .with("apt", "/usr/bin/apt")
            .with("flatpak", "/usr/bin/flatpak")
            .with("snap", "/usr/bin/snap")
    }

    fn ubuntu() -> DetectionContext {
        DetectionContext::new("linux").with_distro("ubuntu")
    }

    fn run(
        action: Action,
        probe: &StaticProbe,
        exec: &mut RecordingExecutor,
        ui: &mut MockUI,
    ) -> Result<CommandResult> {
        let settings = Settings::default();
        let mut selfm = FakeSelfManager::default();
        Dispatcher::new(&settings, ubuntu(), probe, exec, &mut selfm).dispatch(&action, ui)
    }

    #[test]
    fn install_refreshes_then_installs() {
        let probe = ubuntu_probe();
        let mut exec = RecordingExecutor::new();
        let mut ui = MockUI::new();

        let result = run(Action::Install(Some("htop".into())), &probe, &mut exec, &mut ui).unwrap();

        assert!(result.success);
        assert_eq!(exec.commands(), vec!["apt update", "apt install htop"]);
        assert!(exec.requests().iter().all(|r| r.requires_privilege));
    }

    #[test]
    fn install_short_circuits_when_binary_present() {
        let probe = ubuntu_probe().with("htop", "/usr/bin/htop");
        let mut exec = RecordingExecutor::new();
        let mut ui = MockUI::new();

        let result = run(Action::Install(Some("htop".into())), &probe, &mut exec, &mut ui).unwrap();

        assert!(result.success);
        assert!(exec.requests().is_empty());
        assert!(ui.has_success("already installed"));
    }

    #[test]
    fn refresh_failure_is_only_a_warning() {
        let probe = ubuntu_probe();
        let mut exec = RecordingExecutor::new().with_exit_code("apt update", 100);
        let mut ui = MockUI::new();

        let result = run(Action::Search(Some("htop".into())), &probe, &mut exec, &mut ui).unwrap();

        assert!(result.success);
        assert_eq!(exec.commands(), vec!["apt update", "apt search htop"]);
        assert!(ui.has_warning("index refresh for 'apt' failed"));
    }

    #[test]
    fn refresh_spawn_failure_is_only_a_warning() {
        let probe = ubuntu_probe();
        let mut exec = RecordingExecutor::new().with_spawn_failure("apt update");
        let mut ui = MockUI::new();

        let result = run(Action::Install(Some("htop".into())), &probe, &mut exec, &mut ui).unwrap();

        assert!(result.success);
        assert_eq!(exec.commands(), vec!["apt install htop"]);
    }

    #[test]
    fn info_and_uninstall_do_not_refresh() {
        let probe = ubuntu_probe();
        let mut exec = RecordingExecutor::new();
        let mut ui = MockUI::new();

        run(Action::Info(Some("vim".into())), &probe, &mut exec, &mut ui).unwrap();
        run(Action::Uninstall(Some("vim".into())), &probe, &mut exec, &mut ui).unwrap();

        assert_eq!(exec.commands(), vec!["apt show vim", "apt remove vim"]);
    }

    #[test]
    fn single_target_failure_is_error() {
        let probe = ubuntu_probe();
        let mut exec = RecordingExecutor::new().with_exit_code("apt remove vim", 100);
        let mut ui = MockUI::new();

        let err = run(Action::Uninstall(Some("vim".into())), &probe, &mut exec, &mut ui)
            .unwrap_err();

        assert!(matches!(
            err,
            InstallerError::CommandFailed { code: Some(100), .. }
        ));
    }

    #[test]
    fn upgrade_one_package_uses_primary() {
        let probe = ubuntu_probe();
        let mut exec = RecordingExecutor::new();
        let mut ui = MockUI::new();

        run(Action::Upgrade(Some("vim".into())), &probe, &mut exec, &mut ui).unwrap();

        assert_eq!(
            exec.commands(),
            vec!["apt update", "apt install --only-upgrade vim"]
        );
    }

    #[test]
    fn upgrade_all_fans_out_with_per_manager_refresh() {
        let probe = ubuntu_probe();
        let mut exec = RecordingExecutor::new();
        let mut ui = MockUI::new();

        let result = run(Action::Upgrade(None), &probe, &mut exec, &mut ui).unwrap();

        assert!(result.success);
        assert_eq!(
            exec.commands(),
            vec![
                "apt update",
                "apt upgrade",
                "snap refresh",
                "flatpak update --appstream",
                "flatpak update",
            ]
        );
        assert_eq!(ui.headers(), &["apt", "snap", "flatpak"]);
    }

    #[test]
    fn fan_out_continues_after_failure() {
        let probe = ubuntu_probe();
        let mut exec = RecordingExecutor::new().with_exit_code("snap refresh", 1);
        let mut ui = MockUI::new();

        let result = run(Action::Upgrade(None), &probe, &mut exec, &mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(exec.commands().contains(&"flatpak update"));
        assert!(ui.has_error("upgrade-all failed for: snap"));
    }

    #[test]
    fn fan_out_continues_after_spawn_failure() {
        let probe = ubuntu_probe();
        let mut exec = RecordingExecutor::new().with_spawn_failure("apt upgrade");
        let mut ui = MockUI::new();

        let result = run(Action::Upgrade(None), &probe, &mut exec, &mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(exec.commands().contains(&"flatpak update"));
        assert!(exec.commands().contains(&"snap refresh"));
    }

    #[test]
    fn missing_escalation_aborts_fan_out() {
        let settings = Settings::default();
        let probe = StaticProbe::new()
            .with("brew", "/opt/homebrew/bin/brew")
            .with("port", "/opt/local/bin/port");
        let mut exec = RecordingExecutor::new().with_escalation(Escalation::Unavailable);
        let mut selfm = FakeSelfManager::default();
        let mut ui = MockUI::new();

        let err = Dispatcher::new(
            &settings,
            DetectionContext::new("macos"),
            &probe,
            &mut exec,
            &mut selfm,
        )
        .dispatch(&Action::Upgrade(None), &mut ui)
        .unwrap_err();

        assert!(matches!(
            err,
            InstallerError::NoPrivilegeEscalationTool { .. }
        ));
        assert_eq!(exec.commands(), vec!["brew update", "brew upgrade"]);
    }

    #[test]
    fn list_installed_fans_out_without_refresh() {
        let probe = ubuntu_probe();
        let mut exec = RecordingExecutor::new();
        let mut ui = MockUI::new();

        run(Action::ListInstalled, &probe, &mut exec, &mut ui).unwrap();

        assert_eq!(
            exec.commands(),
            vec!["apt list --installed", "snap list", "flatpak list"]
        );
    }

    #[test]
    fn list_upgradable_skips_managers_without_template() {
        static NO_OUTDATED: &[ManagerDescriptor] = &[
            ManagerDescriptor {
                id: "apt",
                binary: "apt",
                templates: Templates {
                    install: None,
                    uninstall: None,
                    upgrade: None,
                    upgrade_all: None,
                    search: None,
                    info: None,
                    list_installed: None,
                    list_upgradable: Some(Template {
                        command: "apt list --upgradable",
                        privileged: false,
                    }),
                    update_index: None,
                },
            },
            ManagerDescriptor {
                id: "snap",
                binary: "snap",
                templates: Templates {
                    install: None,
                    uninstall: None,
                    upgrade: None,
                    upgrade_all: None,
                    search: None,
                    info: None,
                    list_installed: None,
                    list_upgradable: None,
                    update_index: None,
                },
            },
        ];

        let settings = Settings::default();
        let probe = StaticProbe::new();
        let mut exec = RecordingExecutor::new();
        let mut selfm = FakeSelfManager::default();
        let mut ui = MockUI::new();
        let ctx = DetectionContext::new("linux").with_forced_manager("snap");

        let result = Dispatcher::new(&settings, ctx, &probe, &mut exec, &mut selfm)
            .with_catalog(Catalog::from_descriptors(NO_OUTDATED))
            .dispatch(&Action::ListUpgradable, &mut ui)
            .unwrap();

        assert!(result.success);
        assert!(exec.requests().is_empty());
        assert!(ui.has_warning("'snap' does not support 'list-upgradable'"));
    }

    #[test]
    fn unknown_verb_spawns_nothing() {
        let probe = ubuntu_probe();
        let mut exec = RecordingExecutor::new();
        let mut ui = MockUI::new();

        let err = run(Action::Unknown("frobnicate".into()), &probe, &mut exec, &mut ui)
            .unwrap_err();

        assert!(matches!(err, InstallerError::UnsupportedVerb { ref verb } if verb == "frobnicate"));
        assert!(exec.requests().is_empty());
        assert!(probe.queries().is_empty());
    }

    #[test]
    fn reinstall_is_unsupported() {
        let probe = ubuntu_probe();
        let mut exec = RecordingExecutor::new();
        let mut ui = MockUI::new();

        let err = run(Action::Reinstall(Some("vim".into())), &probe, &mut exec, &mut ui)
            .unwrap_err();
        assert!(matches!(err, InstallerError::UnsupportedVerb { .. }));
        assert!(exec.requests().is_empty());
    }

    #[test]
    fn missing_package_prints_usage_and_succeeds() {
        let probe = ubuntu_probe();
        let mut exec = RecordingExecutor::new();
        let mut ui = MockUI::new();

        let result = run(Action::Install(None), &probe, &mut exec, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("usage: i install <package>"));
        assert!(probe.queries().is_empty());
    }

    #[test]
    fn invalid_package_is_rejected_before_anything_runs() {
        let probe = ubuntu_probe();
        let mut exec = RecordingExecutor::new();
        let mut ui = MockUI::new();

        let err = run(
            Action::Install(Some("vim; rm -rf /".into())),
            &probe,
            &mut exec,
            &mut ui,
        )
        .unwrap_err();

        assert!(matches!(err, InstallerError::InvalidPackageName { .. }));
        assert!(exec.requests().is_empty());
        assert!(probe.queries().is_empty());
    }

    #[test]
    fn no_manager_found_is_error() {
        let probe = StaticProbe::new();
        let mut exec = RecordingExecutor::new();
        let mut ui = MockUI::new();

        let err = run(Action::ListInstalled, &probe, &mut exec, &mut ui).unwrap_err();
        assert!(matches!(err, InstallerError::NoManagerFound { .. }));
    }

    #[test]
    fn forced_manager_is_used() {
        let settings = Settings::default();
        let probe = ubuntu_probe();
        let mut exec = RecordingExecutor::new();
        let mut selfm = FakeSelfManager::default();
        let mut ui = MockUI::new();
        let ctx = ubuntu().with_forced_manager("flatpak");

        Dispatcher::new(&settings, ctx, &probe, &mut exec, &mut selfm)
            .dispatch(&Action::Install(Some("org.gimp.GIMP".into())), &mut ui)
            .unwrap();

        assert_eq!(
            exec.commands(),
            vec!["flatpak update --appstream", "flatpak install org.gimp.GIMP"]
        );
        assert!(!exec.requests()[1].requires_privilege);
    }

    #[test]
    fn quiet_setting_reaches_requests() {
        let settings = Settings::new(OutputMode::Quiet);
        let probe = ubuntu_probe();
        let mut exec = RecordingExecutor::new();
        let mut selfm = FakeSelfManager::default();
        let mut ui = MockUI::with_mode(OutputMode::Quiet);

        Dispatcher::new(&settings, ubuntu(), &probe, &mut exec, &mut selfm)
            .dispatch(&Action::Info(Some("vim".into())), &mut ui)
            .unwrap();

        assert!(exec.requests().iter().all(|r| r.quiet));
    }

    #[test]
    fn pmlist_lists_catalog_without_probing() {
        let probe = StaticProbe::new();
        let mut exec = RecordingExecutor::new();
        let mut ui = MockUI::new();

        run(Action::PmList, &probe, &mut exec, &mut ui).unwrap();

        assert!(ui.has_message("apt"));
        assert!(ui.has_message("winget"));
        assert!(probe.queries().is_empty());
    }

    #[test]
    fn pms_lists_detected_managers() {
        let probe = ubuntu_probe();
        let mut exec = RecordingExecutor::new();
        let mut ui = MockUI::new();

        run(Action::Pms, &probe, &mut exec, &mut ui).unwrap();

        assert!(ui.has_message("apt -> /usr/bin/apt (primary)"));
        assert!(ui.has_message("snap -> /usr/bin/snap"));
        assert!(exec.requests().is_empty());
    }

    #[test]
    fn self_management_goes_through_collaborator() {
        let settings = Settings::default();
        let probe = StaticProbe::new();
        let mut exec = RecordingExecutor::new();
        let mut ui = MockUI::new();
        let mut selfm = FakeSelfManager::default();

        let result = Dispatcher::new(&settings, ubuntu(), &probe, &mut exec, &mut selfm)
            .dispatch(&Action::SelfUpdate, &mut ui)
            .unwrap();
        assert!(result.success);

        let declined = Dispatcher::new(&settings, ubuntu(), &probe, &mut exec, &mut selfm)
            .dispatch(&Action::SelfUninstall, &mut ui)
            .unwrap();
        assert_eq!(declined.exit_code, 1);

        assert_eq!(selfm.updates, 1);
        assert!(probe.queries().is_empty());
    }

    #[test]
    fn usage_line() {
        assert_eq!(usage("search"), "usage: i search <package>");
    }
}
