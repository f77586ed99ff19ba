use std::sync::Arc;

use aya::programs::{
    BtfTracePoint, KProbe, TracePoint,
};
use aya::{Ebpf, EbpfLoader};
use ebpf_monitor_common::TaskOffsets;
use tokio::sync::Mutex;

use crate::errors::{AttachError, LoadError};

/// Single loaded BPF object, shared across all monitors. aya compiles one
/// ELF per BPF crate, so every monitor's programs and maps live in this
/// one `Ebpf`; monitors take ownership of their own maps via
/// `Ebpf::take_map` and briefly lock this to attach/detach programs.
pub type SharedEbpf = Arc<Mutex<Ebpf>>;

const ENV_BPF_OBJECT: &str = "EBPF_MONITOR_BPF_OBJECT";
const CANDIDATE_PATHS: &[&str] = &[
    "/usr/lib/ebpf-monitor/ebpf-monitor-ebpf",
    "/usr/local/lib/ebpf-monitor/ebpf-monitor-ebpf",
    "./target/bpfel-unknown-none/release/ebpf-monitor-ebpf",
    "./target/bpfel-unknown-none/debug/ebpf-monitor-ebpf",
    "../target/bpfel-unknown-none/release/ebpf-monitor-ebpf",
    "../target/bpfel-unknown-none/debug/ebpf-monitor-ebpf",
];

/// Finds the compiled BPF object, checking the env override first, then
/// a fixed list of install/build locations.
pub fn read_bpf_bytes() -> Result<Vec<u8>, LoadError> {
    if let Ok(path) = std::env::var(ENV_BPF_OBJECT) {
        return std::fs::read(&path).map_err(|source| LoadError::ReadObject { path, source });
    }
    for candidate in CANDIDATE_PATHS {
        if let Ok(bytes) = std::fs::read(candidate) {
            return Ok(bytes);
        }
    }
    Err(LoadError::ObjectNotFound {
        checked: CANDIDATE_PATHS.len(),
    })
}

/// Loads the BPF object, pushing `task_offsets` into the `TASK_OFFSETS`
/// global before load so CO-RE-dependent programs can read it from the
/// first instruction.
pub fn load(task_offsets: TaskOffsets) -> Result<SharedEbpf, LoadError> {
    let bytes = read_bpf_bytes()?;
    let mut loader = EbpfLoader::new();
    loader.set_global("TASK_OFFSETS", &task_offsets, true);
    let ebpf = loader.load(&bytes)?;
    Ok(Arc::new(Mutex::new(ebpf)))
}

/// Attaches a tracepoint program, failing hard if the attach point is
/// unavailable. Used for monitors that must attach for the collector to
/// be useful at all.
pub async fn attach_tracepoint(
    bpf: &SharedEbpf,
    program_name: &str,
    category: &str,
    name: &str,
) -> Result<(), AttachError> {
    let mut guard = bpf.lock().await;
    let program = guard
        .program_mut(program_name)
        .ok_or_else(|| AttachError::ProgramNotFound {
            name: program_name.to_string(),
        })?;
    let tp: &mut TracePoint = program
        .try_into()
        .map_err(|source| AttachError::Attach {
            name: program_name.to_string(),
            source,
        })?;
    tp.load().map_err(|source| AttachError::Attach {
        name: program_name.to_string(),
        source,
    })?;
    tp.attach(category, name)
        .map_err(|source| AttachError::Attach {
            name: program_name.to_string(),
            source,
        })?;
    Ok(())
}

/// Same as [`attach_tracepoint`] but logs and returns `Ok` on failure
/// instead of propagating the error, for attach points that are best
/// effort (e.g. page fault tracing on kernels without it).
pub async fn attach_tracepoint_optional(
    bpf: &SharedEbpf,
    program_name: &str,
    category: &str,
    name: &str,
) {
    if let Err(err) = attach_tracepoint(bpf, program_name, category, name).await {
        log::warn!("optional tracepoint {program_name} ({category}:{name}) not attached: {err}");
    }
}

pub async fn attach_kprobe(
    bpf: &SharedEbpf,
    program_name: &str,
    function: &str,
) -> Result<(), AttachError> {
    let mut guard = bpf.lock().await;
    let program = guard
        .program_mut(program_name)
        .ok_or_else(|| AttachError::ProgramNotFound {
            name: program_name.to_string(),
        })?;
    let kp: &mut KProbe = program
        .try_into()
        .map_err(|source| AttachError::Attach {
            name: program_name.to_string(),
            source,
        })?;
    kp.load().map_err(|source| AttachError::Attach {
        name: program_name.to_string(),
        source,
    })?;
    kp.attach(function, 0)
        .map_err(|source| AttachError::Attach {
            name: program_name.to_string(),
            source,
        })?;
    Ok(())
}

pub async fn attach_kprobe_optional(bpf: &SharedEbpf, program_name: &str, function: &str) {
    if let Err(err) = attach_kprobe(bpf, program_name, function).await {
        log::warn!("optional kprobe {program_name} ({function}) not attached: {err}");
    }
}

/// Resolves a kernel symbol's entry address from `/proc/kallsyms`, the
/// same table `kp.attach` ultimately resolves against, so the address we
/// record in `FUNC_TARGETS` agrees with what `ctx.ip()` reports in the
/// kernel-side handler.
fn kallsyms_address(symbol: &str) -> Option<u64> {
    let contents = std::fs::read_to_string("/proc/kallsyms").ok()?;
    for line in contents.lines() {
        let mut fields = line.split_whitespace();
        let addr = fields.next()?;
        let _kind = fields.next()?;
        let name = fields.next()?;
        if name == symbol {
            return u64::from_str_radix(addr, 16).ok();
        }
    }
    None
}

/// Attaches the Func monitor's single compiled kprobe handler at many
/// kernel symbols (up to `probe_limit`), recording each attach address in
/// `FUNC_TARGETS` so the shared handler body can disambiguate at runtime.
pub async fn attach_func_targets(
    bpf: &SharedEbpf,
    program_name: &str,
    symbols: &[String],
    probe_limit: u32,
    targets_map: &mut aya::maps::HashMap<aya::maps::MapData, u64, u32>,
) -> Result<usize, AttachError> {
    let mut attached = 0usize;
    for (func_id, symbol) in symbols.iter().enumerate() {
        if attached as u32 >= probe_limit {
            log::warn!("func monitor: probe_limit {probe_limit} reached, skipping remaining symbols");
            break;
        }
        let Some(address) = kallsyms_address(symbol) else {
            log::warn!("func monitor: symbol {symbol} not found in /proc/kallsyms");
            continue;
        };
        let mut guard = bpf.lock().await;
        let program = guard
            .program_mut(program_name)
            .ok_or_else(|| AttachError::ProgramNotFound {
                name: program_name.to_string(),
            })?;
        let kp: &mut KProbe = program
            .try_into()
            .map_err(|source| AttachError::Attach {
                name: program_name.to_string(),
                source,
            })?;
        if attached == 0 {
            kp.load().map_err(|source| AttachError::Attach {
                name: program_name.to_string(),
                source,
            })?;
        }
        match kp.attach(symbol.as_str(), 0) {
            Ok(_link_id) => {
                drop(guard);
                if let Err(err) = targets_map.insert(address, func_id as u32, 0) {
                    log::warn!("func monitor: failed to record target for {symbol}: {err}");
                    continue;
                }
                attached += 1;
            }
            Err(err) => {
                log::warn!("func monitor: failed to attach symbol {symbol}: {err}");
            }
        }
    }
    Ok(attached)
}

pub async fn attach_btf_tracepoint(
    bpf: &SharedEbpf,
    program_name: &str,
    function: &str,
) -> Result<(), AttachError> {
    let mut guard = bpf.lock().await;
    let program = guard
        .program_mut(program_name)
        .ok_or_else(|| AttachError::ProgramNotFound {
            name: program_name.to_string(),
        })?;
    let btf: &mut BtfTracePoint = program
        .try_into()
        .map_err(|source| AttachError::Attach {
            name: program_name.to_string(),
            source,
        })?;
    let btf_info = aya::Btf::from_sys_fs().map_err(|_| AttachError::RequiredUnavailable {
        name: program_name.to_string(),
        reason: "system BTF unavailable".to_string(),
    })?;
    btf.load(function, &btf_info)
        .map_err(|source| AttachError::Attach {
            name: program_name.to_string(),
            source,
        })?;
    btf.attach().map_err(|source| AttachError::Attach {
        name: program_name.to_string(),
        source,
    })?;
    Ok(())
}

pub async fn attach_btf_tracepoint_optional(bpf: &SharedEbpf, program_name: &str, function: &str) {
    if let Err(err) = attach_btf_tracepoint(bpf, program_name, function).await {
        log::warn!("optional BTF tracepoint {program_name} ({function}) not attached: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex as StdMutex;

    // Serializes env-var-mutating tests; `std::env::set_var` affects the
    // whole process so tests sharing it can't run concurrently.
    static ENV_LOCK: StdMutex<()> = StdMutex::new(());

    #[test]
    fn kallsyms_address_returns_none_for_bogus_symbol() {
        assert_eq!(kallsyms_address("definitely_not_a_real_kernel_symbol_xyz"), None);
    }

    #[test]
    fn read_bpf_bytes_honors_env_override() {
        let _guard = ENV_LOCK.lock().unwrap();
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"fake-elf-bytes").unwrap();
        std::env::set_var(ENV_BPF_OBJECT, file.path());
        let bytes = read_bpf_bytes().unwrap();
        std::env::remove_var(ENV_BPF_OBJECT);
        assert_eq!(bytes, b"fake-elf-bytes");
    }

    #[test]
    fn read_bpf_bytes_errors_when_nothing_found() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var(ENV_BPF_OBJECT);
        assert!(read_bpf_bytes().is_err());
    }
}
