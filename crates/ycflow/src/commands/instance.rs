use crate::utils::expand_home;
use anyhow::Context;
use colored::Colorize;
use ycflow_cloud::{DesiredSpec, Reconciler, ReconciliationResult};
use ycflow_cloud_yandex::{ProviderSettings, YandexCloudProvider, YcCli};
use ycflow_config::{Config, InstanceDefaults};

/// Command line input of `ycflow instance`
#[derive(Debug, Clone, Default)]
pub struct InstanceOptions {
    pub name: String,
    pub cores: Option<i64>,
    pub memory_g: Option<i64>,
    pub disk_g: Option<i64>,
    pub image: Option<String>,
    pub ssh_key: Option<String>,
    pub check: bool,
    pub yc: Option<String>,
}

impl InstanceOptions {
    /// Fill unset attributes from `defaults`
    pub fn desired_spec(&self, defaults: &InstanceDefaults) -> anyhow::Result<DesiredSpec> {
        let ssh_key = self.ssh_key.as_deref().unwrap_or(&defaults.ssh_key);

        Ok(DesiredSpec {
            name: self.name.clone(),
            cores: self.cores.unwrap_or(defaults.cores),
            memory_g: self.memory_g.unwrap_or(defaults.memory_g),
            disk_g: self.disk_g.unwrap_or(defaults.disk_g),
            image: self.image.clone().unwrap_or_else(|| defaults.image.clone()),
            ssh_key: expand_home(ssh_key)?,
        })
    }
}

fn provider(config: &Config, program: Option<String>) -> YandexCloudProvider<YcCli> {
    let gateway = YcCli::new()
        .with_program(program.unwrap_or_else(|| config.yc.program.clone()))
        .with_profile(config.yc.profile.clone())
        .with_folder_id(config.yc.folder_id.clone());

    let settings = ProviderSettings {
        zone: config.yc.zone.clone(),
        disk_type: config.boot_disk.disk_type.clone(),
        image_folder_id: config.boot_disk.image_folder_id.clone(),
    };

    YandexCloudProvider::with_settings(gateway, settings)
}

pub async fn handle(config: &Config, options: InstanceOptions) -> anyhow::Result<()> {
    let desired = options.desired_spec(&config.defaults)?;
    tracing::debug!("Desired instance: {:?}", desired);
    let reconciler = Reconciler::new(provider(config, options.yc.clone()));

    let result = reconciler
        .reconcile(&desired, options.check)
        .await
        .with_context(|| format!("failed to reconcile instance '{}'", desired.name))?;

    print_summary(&result, options.check);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn print_summary(result: &ReconciliationResult, check: bool) {
    let name = result.name.cyan();
    match (check, result.changed) {
        (true, true) => eprintln!("{} {} would be created or replaced", "~".yellow(), name),
        (true, false) => eprintln!("{} {} is up to date", "✓".green(), name),
        (false, true) => eprintln!("{} {} reconciled", "✓".green().bold(), name),
        (false, false) => eprintln!("{} {} is up to date", "✓".green(), name),
    }

    if let Some(ref instance) = result.instance {
        eprintln!(
            "  {} cores, {}G memory, {}G disk, public IP {}",
            instance.cores,
            instance.memory_g,
            instance.disk_g,
            instance.public_ip.cyan()
        );
    }
}
