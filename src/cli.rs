use crate::catalog::{self, DEFAULT_DATA_DIR, DownloadTask, Selection};
use crate::download::{download_file_blocking, drive};
use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;
use url::Url;

/// Fetch the demo data sets from Google Drive.
#[derive(Parser, Debug)]
#[command(version, about, long_about=None)]
pub struct Cli {
    /// Carbon nanotube 4D-STEM data set
    #[arg(long = "dpc_nanotube")]
    dpc_nanotube: bool,

    /// Probe scans and particles used to build probe templates
    #[arg(long = "make_probe_templates")]
    make_probe_templates: bool,

    /// Quantum well data for the strain mapping demo
    #[arg(long = "strain_simple_quantum_well")]
    strain_simple_quantum_well: bool,

    /// download all the files
    #[arg(long)]
    all: bool,

    /// Directory the files are written to
    #[arg(short, long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Drive export endpoint
    #[arg(long, default_value = drive::DEFAULT_ENDPOINT, hide = true)]
    endpoint: Url,
}

impl Cli {
    pub fn selection(&self) -> Selection {
        Selection {
            dpc_nanotube: self.dpc_nanotube,
            make_probe_templates: self.make_probe_templates,
            strain_simple_quantum_well: self.strain_simple_quantum_well,
            all: self.all,
        }
    }

    pub fn execute(&self) -> Result<()> {
        self.run_with(|task, destination| {
            download_file_blocking(&self.endpoint, task.remote_id, destination).map(|_| ())
        })
    }

    fn run_with<F>(&self, mut fetch: F) -> Result<()>
    where
        F: FnMut(&DownloadTask, &Path) -> Result<()>,
    {
        for (group, task) in catalog::plan(&self.selection()) {
            let destination = task.destination(&self.data_dir);
            info!(
                ?group,
                remote_id = task.remote_id,
                destination = %destination.display(),
                "Downloading"
            );
            fetch(task, &destination)?;
        }
        Ok(())
    }
}
