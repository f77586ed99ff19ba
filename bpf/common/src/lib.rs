#![cfg_attr(all(feature = "bpf", not(feature = "user")), no_std)]

//! Wire-format types shared between the in-kernel BPF programs and the
//! user-space daemon. Every map key/value crossing that boundary lives here
//! so both sides agree on layout without having to re-derive it.
//!
//! All types are `#[repr(C)]` and implement `bytemuck::{Pod, Zeroable}` so
//! they can be copied in and out of BPF maps without serialization. Map
//! *keys* are hashed over their raw bytes by the kernel, so every key type
//! here is laid out with fields ordered largest-first to avoid implicit
//! padding gaps; where padding is unavoidable (TrackMap values, wide
//! StatsValue rows) it is an explicit named field so callers can zero it.

#[cfg(test)]
use core::mem::size_of;

use bytemuck::{Pod, Zeroable};

/// Capacity shared by every StatsMap, per the data model.
pub const STATS_MAP_CAPACITY: u32 = 10_240;

/// Capacity shared by every TrackMap (entry/exit pairing table).
pub const TRACK_MAP_CAPACITY: u32 = 10_240;

/// `comm` is always a 16-byte, NUL-padded task name, matching
/// `task_struct::comm` in the kernel.
pub type Comm = [u8; 16];

pub fn comm_from_str(name: &str) -> Comm {
    let mut out = [0u8; 16];
    let bytes = name.as_bytes();
    let len = bytes.len().min(15);
    out[..len].copy_from_slice(&bytes[..len]);
    out
}

#[cfg(feature = "user")]
pub fn comm_to_string(comm: &Comm) -> String {
    let nul = comm.iter().position(|b| *b == 0).unwrap_or(comm.len());
    String::from_utf8_lossy(&comm[..nul]).into_owned()
}

// ---------------------------------------------------------------------
// Exec monitor (event-stream variant)
// ---------------------------------------------------------------------

/// How an [`ExecEvent`] was produced; governs which CSV columns are
/// meaningful for the row.
pub mod exec_path {
    pub const TRACEPOINT: u8 = 0;
    pub const KPROBE: u8 = 1;
}

/// Fixed-size record emitted on the exec perf ring. The tracepoint path
/// populates `ppid`/`ret`/`argv`; the kprobe fallback leaves those at zero
/// and callers must treat `path == KPROBE` as "blank those columns", not
/// "they are legitimately zero".
#[repr(C)]
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "user", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecEvent {
    pub ts_ns: u64,
    pub uid: u32,
    pub pid: u32,
    pub ppid: u32,
    pub ret: i32,
    pub comm: Comm,
    pub path: u8,
    _pad: [u8; 7],
    /// argv (tracepoint path: up to 4 tokens of up to 15 bytes each, space
    /// separated, NUL terminated) or filename (kprobe path).
    #[cfg_attr(feature = "user", serde(with = "serde_big_array::BigArray"))]
    pub argv_or_filename: [u8; 64],
}

unsafe impl Pod for ExecEvent {}
unsafe impl Zeroable for ExecEvent {}

impl ExecEvent {
    pub const fn zeroed() -> Self {
        Self {
            ts_ns: 0,
            uid: 0,
            pid: 0,
            ppid: 0,
            ret: 0,
            comm: [0u8; 16],
            path: exec_path::TRACEPOINT,
            _pad: [0u8; 7],
            argv_or_filename: [0u8; 64],
        }
    }
}

/// TrackMap entry pairing `sys_enter_execve` (where argv and the parent
/// pid are readable) with `sys_exit_execve` (where `ret` becomes
/// available), keyed by `pid_tgid`. Kprobe-path exec events skip this
/// pairing entirely and build an [`ExecEvent`] directly at entry.
#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct ExecTrackEntry {
    pub ts_ns: u64,
    pub uid: u32,
    pub pid: u32,
    pub ppid: u32,
    _pad: u32,
    pub comm: Comm,
    pub argv: [u8; 64],
}
unsafe impl Pod for ExecTrackEntry {}
unsafe impl Zeroable for ExecTrackEntry {}

impl ExecTrackEntry {
    pub const fn zeroed() -> Self {
        Self {
            ts_ns: 0,
            uid: 0,
            pid: 0,
            ppid: 0,
            _pad: 0,
            comm: [0u8; 16],
            argv: [0u8; 64],
        }
    }
}

// ---------------------------------------------------------------------
// Func monitor
// ---------------------------------------------------------------------

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "user", derive(serde::Serialize, serde::Deserialize))]
pub struct FuncKey {
    pub comm: Comm,
    pub func_id: u32,
}
unsafe impl Pod for FuncKey {}
unsafe impl Zeroable for FuncKey {}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "user", derive(serde::Serialize, serde::Deserialize))]
pub struct FuncValue {
    pub count: u64,
}
unsafe impl Pod for FuncValue {}
unsafe impl Zeroable for FuncValue {}

// ---------------------------------------------------------------------
// Syscall monitor
// ---------------------------------------------------------------------

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "user", derive(serde::Serialize, serde::Deserialize))]
pub struct SyscallKey {
    pub comm: Comm,
    pub syscall_nr: u32,
}
unsafe impl Pod for SyscallKey {}
unsafe impl Zeroable for SyscallKey {}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "user", derive(serde::Serialize, serde::Deserialize))]
pub struct SyscallValue {
    pub count: u64,
    pub error_count: u64,
}
unsafe impl Pod for SyscallValue {}
unsafe impl Zeroable for SyscallValue {}

// ---------------------------------------------------------------------
// Bio monitor
// ---------------------------------------------------------------------

/// `rwbs` bit flags, OR'ed as the kernel reports them.
pub mod bio_type {
    pub const READ: u32 = 1 << 0;
    pub const WRITE: u32 = 1 << 1;
    pub const SYNC: u32 = 1 << 2;
    pub const FLUSH: u32 = 1 << 3;
    pub const DISCARD: u32 = 1 << 4;
    pub const METADATA: u32 = 1 << 5;
    pub const FUA: u32 = 1 << 6;
    pub const NOTIFY: u32 = 1 << 7;
}

pub fn bio_type_str(mask: u32) -> &'static str {
    match mask {
        m if m & bio_type::WRITE != 0 && m & bio_type::FLUSH != 0 => "WF",
        m if m & bio_type::WRITE != 0 => "W",
        m if m & bio_type::READ != 0 => "R",
        m if m & bio_type::DISCARD != 0 => "D",
        m if m & bio_type::FLUSH != 0 => "F",
        _ => "?",
    }
}

/// Packs `(dev << 32) | sector` into the TrackMap key.
pub fn pack_bio_track_key(dev: u32, sector: u64) -> u64 {
    ((dev as u64) << 32) | (sector & 0xFFFF_FFFF)
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "user", derive(serde::Serialize, serde::Deserialize))]
pub struct BioTrackEntry {
    pub start_ts: u64,
    pub comm: Comm,
    pub bio_type: u32,
    _pad: u32,
    pub nr_bytes: u64,
}
unsafe impl Pod for BioTrackEntry {}
unsafe impl Zeroable for BioTrackEntry {}

impl BioTrackEntry {
    pub fn new(start_ts: u64, comm: Comm, bio_type: u32, nr_bytes: u64) -> Self {
        Self {
            start_ts,
            comm,
            bio_type,
            _pad: 0,
            nr_bytes,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "user", derive(serde::Serialize, serde::Deserialize))]
pub struct BioStatsKey {
    pub comm: Comm,
    pub bio_type: u32,
}
unsafe impl Pod for BioStatsKey {}
unsafe impl Zeroable for BioStatsKey {}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "user", derive(serde::Serialize, serde::Deserialize))]
pub struct BioStatsValue {
    pub count: u64,
    pub total_bytes: u64,
    pub total_ns: u64,
    pub min_ns: u64,
    pub max_ns: u64,
}
unsafe impl Pod for BioStatsValue {}
unsafe impl Zeroable for BioStatsValue {}

/// Completions longer than this are treated as anomalies and dropped
/// rather than folded into min/max/avg.
pub const BIO_ANOMALY_THRESHOLD_NS: u64 = 10_000_000_000;

// ---------------------------------------------------------------------
// Open monitor
// ---------------------------------------------------------------------

pub mod open_op {
    pub const OPEN: u32 = 0;
    pub const OPENAT: u32 = 1;
}

pub const OPEN_FILENAME_LEN: usize = 256;

#[repr(C)]
#[derive(Copy, Clone)]
pub struct OpenTrackEntry {
    pub start_ts: u64,
    pub comm: Comm,
    pub operation: u32,
    pub filename: [u8; OPEN_FILENAME_LEN],
    pub flags: u32,
}
unsafe impl Pod for OpenTrackEntry {}
unsafe impl Zeroable for OpenTrackEntry {}

impl Default for OpenTrackEntry {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl OpenTrackEntry {
    pub const fn zeroed() -> Self {
        Self {
            start_ts: 0,
            comm: [0u8; 16],
            operation: open_op::OPEN,
            filename: [0u8; OPEN_FILENAME_LEN],
            flags: 0,
        }
    }
}

/// The oversized key (~276 bytes) the Open monitor's kernel-side helper
/// must build in per-CPU scratch rather than on the BPF stack.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct OpenStatsKey {
    pub comm: Comm,
    pub operation: u32,
    pub filename: [u8; OPEN_FILENAME_LEN],
}
unsafe impl Pod for OpenStatsKey {}
unsafe impl Zeroable for OpenStatsKey {}

impl Default for OpenStatsKey {
    fn default() -> Self {
        Self {
            comm: [0u8; 16],
            operation: 0,
            filename: [0u8; OPEN_FILENAME_LEN],
        }
    }
}

impl core::fmt::Debug for OpenStatsKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OpenStatsKey")
            .field("comm", &self.comm)
            .field("operation", &self.operation)
            .finish()
    }
}

impl PartialEq for OpenStatsKey {
    fn eq(&self, other: &Self) -> bool {
        self.comm == other.comm
            && self.operation == other.operation
            && self.filename[..] == other.filename[..]
    }
}
impl Eq for OpenStatsKey {}

pub const OPEN_STATS_KEY_SIZE: usize = core::mem::size_of::<OpenStatsKey>();

#[repr(C)]
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "user", derive(serde::Serialize, serde::Deserialize))]
pub struct OpenStatsValue {
    pub count: u64,
    pub error_count: u64,
    pub total_lat: u64,
    pub min_lat: u64,
    pub max_lat: u64,
    pub flags_summary: u32,
    _pad: u32,
}
unsafe impl Pod for OpenStatsValue {}
unsafe impl Zeroable for OpenStatsValue {}

impl OpenStatsValue {
    pub fn new(lat: u64, errored: bool, flags: u32) -> Self {
        Self {
            count: 1,
            error_count: if errored { 1 } else { 0 },
            total_lat: lat,
            min_lat: lat,
            max_lat: lat,
            flags_summary: flags,
            _pad: 0,
        }
    }
}

// ---------------------------------------------------------------------
// Interrupt monitor
// ---------------------------------------------------------------------

pub mod irq_type {
    pub const HARDWARE: u32 = 1 << 0;
    pub const SOFTWARE: u32 = 1 << 1;
    pub const TIMER: u32 = 1 << 2;
    pub const NETWORK: u32 = 1 << 3;
    pub const BLOCK: u32 = 1 << 4;
}

pub fn irq_type_str(mask: u32) -> &'static str {
    match mask {
        m if m & irq_type::HARDWARE != 0 => "HARDWARE",
        m if m & irq_type::SOFTWARE != 0 && m & irq_type::TIMER != 0 => "SOFTIRQ_TIMER",
        m if m & irq_type::SOFTWARE != 0 && m & irq_type::NETWORK != 0 => "SOFTIRQ_NET",
        m if m & irq_type::SOFTWARE != 0 && m & irq_type::BLOCK != 0 => "SOFTIRQ_BLOCK",
        m if m & irq_type::SOFTWARE != 0 => "SOFTWARE",
        _ => "UNKNOWN",
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "user", derive(serde::Serialize, serde::Deserialize))]
pub struct InterruptKey {
    pub comm: Comm,
    pub irq_type: u32,
    pub cpu: u32,
}
unsafe impl Pod for InterruptKey {}
unsafe impl Zeroable for InterruptKey {}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "user", derive(serde::Serialize, serde::Deserialize))]
pub struct InterruptValue {
    pub count: u64,
}
unsafe impl Pod for InterruptValue {}
unsafe impl Zeroable for InterruptValue {}

// ---------------------------------------------------------------------
// PageFault monitor
// ---------------------------------------------------------------------

pub mod fault_type {
    pub const MINOR: u32 = 1 << 0;
    pub const MAJOR: u32 = 1 << 1;
    pub const WRITE: u32 = 1 << 2;
    pub const USER: u32 = 1 << 3;
}

pub fn fault_type_str(mask: u32) -> &'static str {
    let major = mask & fault_type::MAJOR != 0;
    let write = mask & fault_type::WRITE != 0;
    match (major, write) {
        (true, true) => "MAJOR_WRITE",
        (true, false) => "MAJOR_READ",
        (false, true) => "MINOR_WRITE",
        (false, false) => "MINOR_READ",
    }
}

/// Derives [`fault_type`] bits from the tracepoint's `error_code` and the
/// handler's own `is_user` determination. SHARED/SWAP are not derivable
/// this way and are intentionally not attempted.
pub fn fault_type_from_error_code(error_code: u64, is_user: bool) -> u32 {
    let mut bits = if error_code & 0x1 != 0 {
        fault_type::MINOR
    } else {
        fault_type::MAJOR
    };
    if error_code & 0x2 != 0 {
        bits |= fault_type::WRITE;
    }
    if is_user {
        bits |= fault_type::USER;
    }
    bits
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "user", derive(serde::Serialize, serde::Deserialize))]
pub struct PageFaultKey {
    pub comm: Comm,
    pub fault_type: u32,
    pub cpu: u32,
}
unsafe impl Pod for PageFaultKey {}
unsafe impl Zeroable for PageFaultKey {}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "user", derive(serde::Serialize, serde::Deserialize))]
pub struct PageFaultValue {
    pub count: u64,
}
unsafe impl Pod for PageFaultValue {}
unsafe impl Zeroable for PageFaultValue {}

// ---------------------------------------------------------------------
// ContextSwitch monitor
// ---------------------------------------------------------------------

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "user", derive(serde::Serialize, serde::Deserialize))]
pub struct ContextSwitchKey {
    pub comm: Comm,
    pub cpu: u32,
}
unsafe impl Pod for ContextSwitchKey {}
unsafe impl Zeroable for ContextSwitchKey {}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "user", derive(serde::Serialize, serde::Deserialize))]
pub struct ContextSwitchValue {
    pub switch_in_count: u64,
    pub switch_out_count: u64,
    pub voluntary_count: u64,
    pub involuntary_count: u64,
}
unsafe impl Pod for ContextSwitchValue {}
unsafe impl Zeroable for ContextSwitchValue {}

// ---------------------------------------------------------------------
// Capability probe: BTF/CO-RE offset bundle pushed into the kernel side
// ---------------------------------------------------------------------

/// Minimal offset bundle the loader derives from BTF before attaching any
/// program that needs CO-RE field access. Kept small deliberately: only
/// the monitors that actually dereference `task_struct` members need it.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
#[cfg_attr(feature = "user", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskOffsets {
    pub task_tgid_offset: u32,
    pub task_pid_offset: u32,
    pub task_comm_offset: u32,
    pub task_real_parent_offset: u32,
}

impl TaskOffsets {
    pub const fn zeroed() -> Self {
        Self {
            task_tgid_offset: 0,
            task_pid_offset: 0,
            task_comm_offset: 0,
            task_real_parent_offset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exec_event_is_eight_byte_aligned() {
        assert_eq!(size_of::<ExecEvent>() % 8, 0);
    }

    #[test]
    fn bio_track_entry_is_eight_byte_aligned() {
        assert_eq!(size_of::<BioTrackEntry>() % 8, 0);
    }

    #[test]
    fn exec_track_entry_is_eight_byte_aligned() {
        assert_eq!(size_of::<ExecTrackEntry>() % 8, 0);
    }

    #[test]
    fn open_track_entry_is_eight_byte_aligned() {
        assert_eq!(size_of::<OpenTrackEntry>() % 8, 0);
    }

    #[test]
    fn open_stats_value_is_eight_byte_aligned() {
        assert_eq!(size_of::<OpenStatsValue>() % 8, 0);
    }

    #[test]
    fn open_stats_key_matches_expected_size() {
        assert_eq!(OPEN_STATS_KEY_SIZE, 16 + 4 + OPEN_FILENAME_LEN);
    }

    #[test]
    fn bio_track_key_packs_dev_and_sector() {
        let key = pack_bio_track_key(8, 123_456);
        assert_eq!(key >> 32, 8);
        assert_eq!(key & 0xFFFF_FFFF, 123_456);
    }

    #[test]
    fn fault_type_decodes_minor_major_write() {
        assert_eq!(fault_type_from_error_code(0b01, false), fault_type::MINOR);
        assert_eq!(fault_type_from_error_code(0b00, false), fault_type::MAJOR);
        assert_eq!(
            fault_type_from_error_code(0b11, true),
            fault_type::MINOR | fault_type::WRITE | fault_type::USER
        );
    }

    #[test]
    fn comm_from_str_truncates_and_pads() {
        let packed = comm_from_str("vfs_read");
        assert_eq!(&packed[..8], b"vfs_read");
        assert_eq!(packed[8], 0);
    }

    #[cfg(feature = "user")]
    #[test]
    fn comm_to_string_stops_at_first_nul() {
        let packed = comm_from_str("sshd");
        assert_eq!(comm_to_string(&packed), "sshd");
    }

    #[cfg(feature = "user")]
    #[test]
    fn func_value_roundtrips_through_json() {
        let value = FuncValue { count: 42 };
        let json = serde_json::to_string(&value).expect("serialize");
        let back: FuncValue = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.count, 42);
    }
}
