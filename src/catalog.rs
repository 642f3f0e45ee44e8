use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "/home/jovyan/data";

/// A named bundle of files that can be selected from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Group {
    DpcNanotube,
    MakeProbeTemplates,
    StrainSimpleQuantumWell,
}

/// A single file hosted on the drive and where it lands locally.
#[derive(Debug, PartialEq, Eq)]
pub struct DownloadTask {
    pub remote_id: &'static str,
    pub file_name: &'static str,
}

impl DownloadTask {
    pub fn destination(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name)
    }
}

const fn task(remote_id: &'static str, file_name: &'static str) -> DownloadTask {
    DownloadTask {
        remote_id,
        file_name,
    }
}

/// Every group with its files. Declared order is download order.
pub const CATALOG: &[(Group, &[DownloadTask])] = &[
    (
        Group::DpcNanotube,
        &[task("1bHv3u61Cr-y_GkdWHrJGh1lw2VKmt3UM", "carbon_nanotube_data.h5")],
    ),
    (
        Group::MakeProbeTemplates,
        &[
            task("1iBSANFQT9eacpn7aAE6PmFdIRYQxenGg", "bullseye_probe_scan_edge.dm4"),
            task("1QTcSKzZjHZd1fDimSI_q9_WsAU25NIXe", "vacuum_probe_20x20.dm4"),
            task("1p9GaV0k628_afbdqFW62rHObcjQ09qyl", "NiPt_nanoparticle_20x20.dm3"),
            task(
                "1sUrPEgM1wWyTh-LJ30lGUhcXklHj6ajC",
                "twinBoundary_ShitengZhao20190115MEA.h5",
            ),
        ],
    ),
    (
        Group::StrainSimpleQuantumWell,
        &[task("1GTxIaxET98vdRMbF8IhhaahipC8NX7iP", "IanQW2.hspy")],
    ),
];

/// Which groups the user asked for.
#[derive(Clone, Copy, Debug, Default)]
pub struct Selection {
    pub dpc_nanotube: bool,
    pub make_probe_templates: bool,
    pub strain_simple_quantum_well: bool,
    pub all: bool,
}

impl Selection {
    pub fn includes(&self, group: Group) -> bool {
        self.all
            || match group {
                Group::DpcNanotube => self.dpc_nanotube,
                Group::MakeProbeTemplates => self.make_probe_templates,
                Group::StrainSimpleQuantumWell => self.strain_simple_quantum_well,
            }
    }
}

pub fn plan(selection: &Selection) -> Vec<(Group, &'static DownloadTask)> {
    CATALOG
        .iter()
        .filter(|(group, _)| selection.includes(*group))
        .flat_map(|(group, tasks)| tasks.iter().map(move |task| (*group, task)))
        .collect()
}
