//! # netinv Interactive Menu
//!
//! File: cli/src/commands/menu.rs
//!
//! ## Overview
//!
//! The numbered text menu that `netinv` (or `netinv menu`) opens:
//!
//! 1. List all devices
//! 2. List active devices only
//! 3. Add a device
//! 4. Search / update / retire a device
//! 5. Subnet planner
//! 6. Inventory report
//! 7. Export inventory to CSV
//! 8. Save & exit
//! 9. Exit without saving
//!
//! ## Architecture
//!
//! `handle_menu` loads the inventory and hands it to `run_menu`, which owns the
//! loop. `run_menu` is generic over the `Prompter`'s reader and writer so the
//! whole menu can be driven from a byte buffer in tests.
//!
//! Changes stay in memory until option 8 writes the inventory file. Errors from
//! a single action (an unknown device, an invalid CIDR, a failed export) are
//! printed and the menu is shown again. End of input leaves without saving.
//!
use crate::common::network::{address, subnet::SubnetPlanner};
use crate::common::ui::{
    prompts::{InputClosed, Prompter},
    tables,
};
use crate::core::{
    config::Config,
    error::Result,
    export,
    inventory::{DeviceId, DeviceStatus, DeviceUpdate, InventoryStore, NewDevice},
    storage,
};
use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

const MENU: &str = "
Network Inventory & Subnet Planner
----------------------------------
1) List all devices
2) List ACTIVE devices only
3) Add a device
4) Search / Update / Retire a device
5) Subnet planner
6) Inventory report
7) Export inventory to CSV
8) Save & Exit
9) Exit without saving
";

const DEVICE_TYPES: [&str; 8] = [
    "Laptop", "Desktop", "Server", "Router", "Switch", "AP", "Printer", "Other",
];

#[derive(Parser, Debug)]
#[command(about = "Open the interactive menu (the default when no command is given)")]
pub struct MenuArgs {}

/// How the menu loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// The inventory was written to the data file.
    Saved,
    /// The user left without saving, or input ended.
    Discarded,
}

pub fn handle_menu(_args: MenuArgs, config: &Config) -> Result<()> {
    let mut store = match storage::load_store(&config.storage.data_file) {
        Ok(store) => store,
        Err(e) => {
            warn!("Starting with an empty inventory: {}", e);
            eprintln!("[ERROR] {}", e);
            eprintln!("Starting with an empty inventory.");
            InventoryStore::new()
        }
    };

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let outcome = run_menu(&mut store, config, &mut prompter)?;
    info!("Menu finished: {:?}", outcome);
    Ok(())
}

/// Runs the menu loop against `store` until the user saves, quits or input ends.
pub fn run_menu<R: BufRead, W: Write>(
    store: &mut InventoryStore,
    config: &Config,
    prompter: &mut Prompter<R, W>,
) -> Result<MenuOutcome> {
    let mut menu = Menu {
        store,
        config,
        prompter,
    };

    let outcome = loop {
        match menu.step() {
            Ok(Some(outcome)) => break outcome,
            Ok(None) => {}
            Err(e) if e.downcast_ref::<InputClosed>().is_some() => {
                warn!("Input closed; leaving the menu without saving");
                menu.prompter.say("\nGoodbye (changes not saved).")?;
                break MenuOutcome::Discarded;
            }
            Err(e) => {
                debug!("Menu action failed: {:?}", e);
                menu.prompter.say(&format!("\nError: {}\n", e))?;
            }
        }
    };
    menu.prompter
        .output()
        .flush()
        .context("Failed to flush terminal output")?;
    Ok(outcome)
}

struct Menu<'a, R, W> {
    store: &'a mut InventoryStore,
    config: &'a Config,
    prompter: &'a mut Prompter<R, W>,
}

impl<R: BufRead, W: Write> Menu<'_, R, W> {
    /// Shows the menu once and runs the chosen action.
    fn step(&mut self) -> Result<Option<MenuOutcome>> {
        self.prompter.say(MENU)?;
        let choice = self.prompter.line("Choose an option (1-9)")?;
        debug!("Menu choice: {:?}", choice);

        match choice.as_str() {
            "1" => self.list(false)?,
            "2" => self.list(true)?,
            "3" => self.add()?,
            "4" => self.search_update_retire()?,
            "5" => self.plan_subnet()?,
            "6" => self.report()?,
            "7" => self.export()?,
            "8" => {
                storage::save_store(self.store, &self.config.storage.data_file)?;
                self.prompter.say("\nSaved. Goodbye!")?;
                return Ok(Some(MenuOutcome::Saved));
            }
            "9" => {
                self.prompter.say("\nGoodbye (changes not saved).")?;
                return Ok(Some(MenuOutcome::Discarded));
            }
            _ => self.prompter.say("\nInvalid choice. Please select 1-9.")?,
        }
        Ok(None)
    }

    fn list(&mut self, active_only: bool) -> Result<()> {
        let table = if active_only {
            tables::device_table(self.store.list_active(), self.store.len())
        } else {
            tables::device_table(self.store.list_all(), self.store.len())
        };
        self.prompter.say(&format!("\n{}", table))
    }

    fn add(&mut self) -> Result<()> {
        self.prompter.say("\nAdd New Device")?;
        let name = self.prompter.nonempty("Device name")?;
        let device_type = self.prompter.choice("Device type", &DEVICE_TYPES)?;
        let ip_address = loop {
            let ip = self.prompter.nonempty("IP address (IPv4/IPv6)")?;
            if address::is_valid_ip(&ip) {
                break ip;
            }
            self.prompter
                .say("  Invalid IP address. Example: 192.168.1.10 or 2001:db8::1")?;
        };
        let location = self
            .prompter
            .nonempty("Location (e.g., Minneapolis HQ, Seattle Branch)")?;
        let owner = self.prompter.nonempty("Owner / primary user")?;
        let notes = self.prompter.line("Notes (optional)")?;

        let id = self
            .store
            .add(NewDevice {
                name,
                device_type: device_type.to_string(),
                ip_address,
                location,
                owner,
                notes,
            })?
            .id;
        self.prompter.say(&format!("\nAdded device {}.", id))
    }

    fn search_update_retire(&mut self) -> Result<()> {
        let Some(id) = self.select_device()? else {
            return Ok(());
        };

        let details = tables::device_details(self.store.find(id)?);
        self.prompter.say(&format!("\nSelected:\n{}", details))?;

        match self
            .prompter
            .choice("Action", &["Update", "Retire", "Cancel"])?
        {
            "Retire" => {
                self.store.retire(id)?;
                self.prompter.say(&format!("\n{} marked as retired.", id))
            }
            "Update" => self.update(id),
            _ => Ok(()),
        }
    }

    /// Searches by id or keyword. Returns `None` when nothing matched or the user cancelled.
    fn select_device(&mut self) -> Result<Option<DeviceId>> {
        if self.store.is_empty() {
            self.prompter.say("\nInventory is empty.")?;
            return Ok(None);
        }

        let query = self
            .prompter
            .line("\nSearch (device ID like DEV-0001 or keyword)")?;
        let (ids, rows): (Vec<DeviceId>, Vec<String>) = self
            .store
            .search(&query)
            .into_iter()
            .enumerate()
            .map(|(i, d)| {
                let row = format!(
                    "  {}) {} | {} | {} | {} | {} | {}",
                    i + 1,
                    d.id,
                    d.name,
                    d.device_type,
                    d.ip_address,
                    d.location,
                    d.status
                );
                (d.id, row)
            })
            .unzip();

        match ids.as_slice() {
            [] => {
                self.prompter.say("No matches.")?;
                Ok(None)
            }
            [only] => Ok(Some(*only)),
            _ => {
                self.prompter.say(&format!("\nMatches:\n{}", rows.join("\n")))?;
                loop {
                    let answer = self
                        .prompter
                        .line("Select a number (or press Enter to cancel)")?;
                    if answer.is_empty() {
                        return Ok(None);
                    }
                    match answer.parse::<usize>() {
                        Ok(n) if (1..=ids.len()).contains(&n) => return Ok(Some(ids[n - 1])),
                        _ => self.prompter.say("  Invalid selection.")?,
                    }
                }
            }
        }
    }

    fn update(&mut self, id: DeviceId) -> Result<()> {
        let current = self.store.find(id)?.clone();
        self.prompter
            .say("\nLeave any field blank to keep current value.\n")?;

        let mut update = DeviceUpdate {
            name: self.prompter.optional(&format!("Name [{}]", current.name))?,
            ..Default::default()
        };

        // Listed types are stored in their canonical spelling; anything else is kept as typed.
        update.device_type = self
            .prompter
            .optional(&format!("Type [{}]", current.device_type))?
            .map(|typed| {
                DEVICE_TYPES
                    .iter()
                    .find(|t| t.eq_ignore_ascii_case(&typed))
                    .map_or(typed, |t| t.to_string())
            });
        update.owner = self.prompter.optional(&format!("Owner [{}]", current.owner))?;
        update.location = self
            .prompter
            .optional(&format!("Location [{}]", current.location))?;

        update.ip_address = loop {
            let ip = self
                .prompter
                .optional(&format!("IP address [{}]", current.ip_address))?;
            match ip {
                Some(ip) if !address::is_valid_ip(&ip) => self
                    .prompter
                    .say("  Invalid IP address. Example: 192.168.1.10 or 2001:db8::1")?,
                ip => break ip,
            }
        };

        if let Some(status) = self
            .prompter
            .optional(&format!("Status [{}] (active/retired)", current.status))?
        {
            match status.parse::<DeviceStatus>() {
                Ok(status) => update.status = Some(status),
                Err(_) => self
                    .prompter
                    .say("  Invalid status entered; keeping previous status.")?,
            }
        }

        let notes_now = if current.notes.is_empty() {
            "(none)"
        } else {
            current.notes.as_str()
        };
        update.notes = self.prompter.optional(&format!("Notes [{}]", notes_now))?;

        if update.is_empty() {
            return self.prompter.say("\nNothing changed.");
        }
        self.store.update(id, update)?;
        self.prompter.say("\nDevice updated.")
    }

    fn plan_subnet(&mut self) -> Result<()> {
        let planner = SubnetPlanner::new(self.config.planner.sample_size);
        self.prompter.say("\nSubnet Planner")?;
        self.prompter
            .say("Enter a network in CIDR format, e.g., 10.0.10.0/24 or 2001:db8::/64")?;

        let result = loop {
            let cidr = self.prompter.nonempty("CIDR network")?;
            match planner.analyze(&cidr) {
                Ok(result) => break result,
                Err(e) => self.prompter.say(&format!("  {} Try again.", e))?,
            }
        };
        self.prompter
            .say(&format!("\n{}", tables::subnet_summary(&result)))
    }

    fn report(&mut self) -> Result<()> {
        let summary = tables::report_summary(&self.store.report());
        self.prompter.say(&format!("\n{}", summary))
    }

    fn export(&mut self) -> Result<()> {
        if self.store.is_empty() {
            return self.prompter.say("\nNothing to export (inventory is empty).");
        }
        let target = &self.config.storage.export_file;
        let rows = export::export_csv(self.store.list_all(), target)?;
        self.prompter
            .say(&format!("\nExported {} device(s) to {}", rows, target.display()))
    }
}
