use aya_ebpf::{
    helpers::{
        bpf_get_current_comm, bpf_get_current_pid_tgid, bpf_get_current_task, bpf_get_current_uid_gid,
        bpf_ktime_get_ns, bpf_probe_read_kernel, bpf_probe_read_kernel_str_bytes, bpf_probe_read_user,
        bpf_probe_read_user_str_bytes,
    },
    macros::{btf_tracepoint, kprobe, kretprobe, map, tracepoint},
    maps::{perf::PerfEventArray, HashMap, PerCpuArray},
    programs::{BtfTracePointContext, ProbeContext, TracePointContext},
    EbpfContext,
};
use aya_log_ebpf::info;
use ebpf_monitor_common::{
    bio_type, comm_from_str, exec_path, fault_type_from_error_code, irq_type, open_op,
    pack_bio_track_key, BioStatsKey, BioStatsValue, BioTrackEntry, ContextSwitchKey,
    ContextSwitchValue, ExecEvent, ExecTrackEntry, FuncKey, FuncValue, InterruptKey, InterruptValue,
    OpenStatsKey, OpenStatsValue, OpenTrackEntry, PageFaultKey, PageFaultValue, SyscallKey,
    SyscallValue, TaskOffsets, BIO_ANOMALY_THRESHOLD_NS, STATS_MAP_CAPACITY, TRACK_MAP_CAPACITY,
};

/// Pushed by the loader from BTF-derived field offsets before any CO-RE
/// program attaches. Only `task_real_parent_offset`/`task_tgid_offset` are
/// read kernel-side today (resolving the real parent pid for exec events).
#[no_mangle]
static TASK_OFFSETS: TaskOffsets = TaskOffsets::zeroed();

/// Walks `current->real_parent->tgid` using the CO-RE offsets pushed at
/// load time. Returns 0 (never a real pid) if either read fails, which
/// callers treat the same as "parent unknown".
fn current_parent_tgid() -> u32 {
    let offsets = unsafe { core::ptr::read_volatile(&TASK_OFFSETS) };
    let task = unsafe { bpf_get_current_task() } as *const u8;
    let parent_ptr_addr = unsafe { task.add(offsets.task_real_parent_offset as usize) } as *const u64;
    let parent = match unsafe { bpf_probe_read_kernel(parent_ptr_addr) } {
        Ok(p) if p != 0 => p as *const u8,
        _ => return 0,
    };
    let tgid_addr = unsafe { parent.add(offsets.task_tgid_offset as usize) } as *const u32;
    unsafe { bpf_probe_read_kernel(tgid_addr) }.unwrap_or(0)
}

// ---------------------------------------------------------------------
// Exec monitor: event stream, not a StatsMap.
//
// Preferred path is the paired syscalls:sys_enter_execve /
// syscalls:sys_exit_execve tracepoints: entry captures argv and the
// parent pid into EXEC_TRACK keyed by pid_tgid, exit pairs that back up
// to fill in `ret` and emits the full ExecEvent. The kprobe fallback is
// single-shot and leaves ppid/ret/argv blank.
// ---------------------------------------------------------------------

const ARGV_MAX_TOKENS: usize = 4;
const ARGV_TOKEN_LEN: usize = 15;

#[map(name = "EVENTS")]
static mut EVENTS: PerfEventArray<ExecEvent> = PerfEventArray::new(0);

#[map(name = "EXEC_TRACK")]
static mut EXEC_TRACK: HashMap<u64, ExecTrackEntry> = HashMap::with_max_entries(TRACK_MAP_CAPACITY, 0);

/// Copies up to [`ARGV_MAX_TOKENS`] user-space argv strings into `out`,
/// space-separated and truncated to [`ARGV_TOKEN_LEN`] bytes each. Stops
/// early on a null pointer (end of argv) or a failed read.
fn capture_argv(argv_ptr: u64, out: &mut [u8; 64]) {
    let mut pos = 0usize;
    for i in 0..ARGV_MAX_TOKENS {
        let entry_addr = argv_ptr + (i as u64) * 8;
        let arg_ptr: u64 = match unsafe { bpf_probe_read_user(entry_addr as *const u64) } {
            Ok(p) => p,
            Err(_) => break,
        };
        if arg_ptr == 0 {
            break;
        }
        let mut token = [0u8; ARGV_TOKEN_LEN + 1];
        let Ok(bytes) = (unsafe { bpf_probe_read_user_str_bytes(arg_ptr as *const u8, &mut token) }) else {
            break;
        };
        if pos > 0 && pos < out.len() {
            out[pos] = b' ';
            pos += 1;
        }
        for &b in bytes.iter().take(ARGV_TOKEN_LEN) {
            if pos >= out.len() {
                break;
            }
            out[pos] = b;
            pos += 1;
        }
    }
}

#[tracepoint(category = "syscalls", name = "sys_enter_execve")]
pub fn trace_exec_enter(ctx: TracePointContext) -> u32 {
    try_trace_exec_enter(ctx)
}

fn try_trace_exec_enter(ctx: TracePointContext) -> u32 {
    let pid = ctx.pid();
    if pid == 0 {
        return 0;
    }
    info!(&ctx, "execve enter, pid={}", pid);
    let pid_tgid = bpf_get_current_pid_tgid();

    let mut entry = ExecTrackEntry::zeroed();
    entry.ts_ns = unsafe { bpf_ktime_get_ns() };
    entry.uid = (unsafe { bpf_get_current_uid_gid() } & 0xFFFF_FFFF) as u32;
    entry.pid = pid;
    entry.ppid = current_parent_tgid();
    entry.comm = bpf_get_current_comm().unwrap_or([0u8; 16]);

    // syscalls:sys_enter_execve layout: common header (8) + __syscall_nr
    // (4, padded to 8) + filename ptr (8) + argv ptr (8) + envp ptr (8).
    const ARGV_OFFSET: usize = 24;
    if let Some(argv_ptr) = tp_read_u64(&ctx, ARGV_OFFSET) {
        capture_argv(argv_ptr, &mut entry.argv);
    }

    let track = unsafe { &EXEC_TRACK };
    let _ = track.insert(&pid_tgid, &entry, 0);
    0
}

#[tracepoint(category = "syscalls", name = "sys_exit_execve")]
pub fn trace_exec_exit(ctx: TracePointContext) -> u32 {
    try_trace_exec_exit(ctx)
}

fn try_trace_exec_exit(ctx: TracePointContext) -> u32 {
    let pid_tgid = bpf_get_current_pid_tgid();
    let track = unsafe { &EXEC_TRACK };
    let entry = match track.get(&pid_tgid) {
        Some(e) => *e,
        None => return 0,
    };
    let _ = track.remove(&pid_tgid);

    // syscalls:sys_exit_execve layout: common header (8) + __syscall_nr
    // (4, padded) + ret (8, long).
    let ret: i64 = tp_read_u64(&ctx, 16).map(|v| v as i64).unwrap_or(0);

    let mut event = ExecEvent::zeroed();
    event.ts_ns = entry.ts_ns;
    event.uid = entry.uid;
    event.pid = entry.pid;
    event.ppid = entry.ppid;
    event.ret = ret as i32;
    event.comm = entry.comm;
    event.path = exec_path::TRACEPOINT;
    event.argv_or_filename = entry.argv;

    let events = unsafe { &mut EVENTS };
    events.output(&ctx, &event, 0);
    0
}

/// Fallback path for kernels where the execve tracepoints above can't be
/// attached. Single-shot at entry: identity, timestamp and filename only.
/// `ppid`/`ret`/argv are left blank; the kprobe CSV header omits them.
#[kprobe]
pub fn trace_exec_kprobe(ctx: ProbeContext) -> u32 {
    try_trace_exec_kprobe(ctx)
}

fn try_trace_exec_kprobe(ctx: ProbeContext) -> u32 {
    let pid = ctx.pid();
    if pid == 0 {
        return 0;
    }
    let mut event = ExecEvent::zeroed();
    event.ts_ns = unsafe { bpf_ktime_get_ns() };
    event.pid = pid;
    event.path = exec_path::KPROBE;
    event.comm = bpf_get_current_comm().unwrap_or([0u8; 16]);
    event.uid = (unsafe { bpf_get_current_uid_gid() } & 0xFFFF_FFFF) as u32;

    if let Some(filename_ptr) = ctx.arg::<*const u8>(0) {
        let _ = unsafe { bpf_probe_read_user_str_bytes(filename_ptr, &mut event.argv_or_filename) };
    }

    let events = unsafe { &mut EVENTS };
    events.output(&ctx, &event, 0);
    0
}

// ---------------------------------------------------------------------
// Func monitor: one compiled kprobe handler, attached at N addresses.
// Userspace populates FUNC_TARGETS with (probed instruction address ->
// func_id) at attach time so the single handler body can tell which
// configured symbol fired.
// ---------------------------------------------------------------------

#[map(name = "FUNC_TARGETS")]
static mut FUNC_TARGETS: HashMap<u64, u32> = HashMap::with_max_entries(256, 0);

#[map(name = "FUNC_STATS")]
static mut FUNC_STATS: HashMap<FuncKey, FuncValue> = HashMap::with_max_entries(STATS_MAP_CAPACITY, 0);

#[kprobe]
pub fn trace_func(ctx: ProbeContext) -> u32 {
    try_trace_func(ctx)
}

fn try_trace_func(ctx: ProbeContext) -> u32 {
    let ip = ctx.ip() as u64;
    let targets = unsafe { &FUNC_TARGETS };
    let func_id = match targets.get(&ip) {
        Some(id) => *id,
        None => return 0,
    };

    let comm = bpf_get_current_comm().unwrap_or([0u8; 16]);
    let key = FuncKey { comm, func_id };
    bump_func_count(&key);
    0
}

fn bump_func_count(key: &FuncKey) {
    let stats = unsafe { &FUNC_STATS };
    if let Some(ptr) = stats.get_ptr_mut(key) {
        unsafe { (*ptr).count += 1 };
    } else {
        let _ = stats.insert(key, &FuncValue { count: 1 }, 0);
    }
}

// ---------------------------------------------------------------------
// Syscall monitor
// ---------------------------------------------------------------------

#[map(name = "SYSCALL_INFLIGHT")]
static mut SYSCALL_INFLIGHT: HashMap<u32, u32> = HashMap::with_max_entries(TRACK_MAP_CAPACITY, 0);

#[map(name = "SYSCALL_STATS")]
static mut SYSCALL_STATS: HashMap<SyscallKey, SyscallValue> =
    HashMap::with_max_entries(STATS_MAP_CAPACITY, 0);

#[tracepoint(category = "raw_syscalls", name = "sys_enter")]
pub fn trace_sys_enter(ctx: TracePointContext) -> u32 {
    try_trace_sys_enter(ctx)
}

fn try_trace_sys_enter(ctx: TracePointContext) -> u32 {
    let pid = ctx.pid();
    if pid == 0 {
        return 0;
    }
    // raw_syscalls:sys_enter layout: common header (8) + id: i64 @ offset 8
    let nr: i64 = match unsafe { ctx.read_at(8) } {
        Ok(v) => v,
        Err(_) => return 0,
    };

    let inflight = unsafe { &SYSCALL_INFLIGHT };
    let _ = inflight.insert(&pid, &(nr as u32), 0);

    let comm = bpf_get_current_comm().unwrap_or([0u8; 16]);
    let key = SyscallKey {
        comm,
        syscall_nr: nr as u32,
    };
    let stats = unsafe { &SYSCALL_STATS };
    if let Some(ptr) = stats.get_ptr_mut(&key) {
        unsafe { (*ptr).count += 1 };
    } else {
        let _ = stats.insert(
            &key,
            &SyscallValue {
                count: 1,
                error_count: 0,
            },
            0,
        );
    }
    0
}

#[tracepoint(category = "raw_syscalls", name = "sys_exit")]
pub fn trace_sys_exit(ctx: TracePointContext) -> u32 {
    try_trace_sys_exit(ctx)
}

fn try_trace_sys_exit(ctx: TracePointContext) -> u32 {
    let pid = ctx.pid();
    if pid == 0 {
        return 0;
    }
    // raw_syscalls:sys_exit layout: common header (8) + id: i64 (8) + ret: i64
    let ret: i64 = match unsafe { ctx.read_at(16) } {
        Ok(v) => v,
        Err(_) => return 0,
    };
    if ret >= 0 {
        return 0;
    }

    let inflight = unsafe { &SYSCALL_INFLIGHT };
    let nr = match inflight.get(&pid) {
        Some(v) => *v,
        None => return 0,
    };
    let comm = bpf_get_current_comm().unwrap_or([0u8; 16]);
    let key = SyscallKey {
        comm,
        syscall_nr: nr,
    };
    let stats = unsafe { &SYSCALL_STATS };
    if let Some(ptr) = stats.get_ptr_mut(&key) {
        unsafe { (*ptr).error_count += 1 };
    }
    0
}

// ---------------------------------------------------------------------
// Bio monitor
// ---------------------------------------------------------------------

const BLOCK_BIO_DEV_OFFSET: usize = 8;
const BLOCK_BIO_SECTOR_OFFSET: usize = 16;
const BLOCK_BIO_NR_SECTOR_OFFSET: usize = 24;
const BLOCK_BIO_RWBS_OFFSET: usize = 28;

#[map(name = "BIO_TRACK")]
static mut BIO_TRACK: HashMap<u64, BioTrackEntry> = HashMap::with_max_entries(TRACK_MAP_CAPACITY, 0);

#[map(name = "BIO_STATS")]
static mut BIO_STATS: HashMap<BioStatsKey, BioStatsValue> =
    HashMap::with_max_entries(STATS_MAP_CAPACITY, 0);

fn tp_read_u64(ctx: &TracePointContext, offset: usize) -> Option<u64> {
    unsafe { ctx.read_at::<u64>(offset).ok() }
}

fn tp_read_u32(ctx: &TracePointContext, offset: usize) -> Option<u32> {
    unsafe { ctx.read_at::<u32>(offset).ok() }
}

/// `rwbs` is a short ASCII string (e.g. "WS", "R"); we only need the
/// first couple of bytes to classify it.
fn decode_rwbs(raw: u32) -> u32 {
    let bytes = raw.to_le_bytes();
    let mut mask = 0u32;
    for b in bytes {
        match b {
            b'R' => mask |= bio_type::READ,
            b'W' => mask |= bio_type::WRITE,
            b'S' => mask |= bio_type::SYNC,
            b'F' => mask |= bio_type::FLUSH,
            b'D' => mask |= bio_type::DISCARD,
            b'M' => mask |= bio_type::METADATA,
            b'E' => mask |= bio_type::FUA,
            b'N' => mask |= bio_type::NOTIFY,
            _ => {}
        }
    }
    mask
}

#[tracepoint(category = "block", name = "block_bio_queue")]
pub fn trace_bio_queue(ctx: TracePointContext) -> u32 {
    try_trace_bio_queue(ctx)
}

fn try_trace_bio_queue(ctx: TracePointContext) -> u32 {
    let dev = match tp_read_u32(&ctx, BLOCK_BIO_DEV_OFFSET) {
        Some(v) => v,
        None => return 0,
    };
    let sector = match tp_read_u64(&ctx, BLOCK_BIO_SECTOR_OFFSET) {
        Some(v) => v,
        None => return 0,
    };
    let nr_sector = tp_read_u32(&ctx, BLOCK_BIO_NR_SECTOR_OFFSET).unwrap_or(0);
    let rwbs = tp_read_u32(&ctx, BLOCK_BIO_RWBS_OFFSET).unwrap_or(0);
    if nr_sector == 0 {
        return 0;
    }

    let key = pack_bio_track_key(dev, sector);
    let comm = bpf_get_current_comm().unwrap_or([0u8; 16]);
    let entry = BioTrackEntry::new(
        unsafe { bpf_ktime_get_ns() },
        comm,
        decode_rwbs(rwbs),
        (nr_sector as u64) * 512,
    );
    let track = unsafe { &BIO_TRACK };
    let _ = track.insert(&key, &entry, 0);
    0
}

#[tracepoint(category = "block", name = "block_rq_complete")]
pub fn trace_bio_complete(ctx: TracePointContext) -> u32 {
    try_trace_bio_complete(ctx)
}

fn try_trace_bio_complete(ctx: TracePointContext) -> u32 {
    let dev = match tp_read_u32(&ctx, BLOCK_BIO_DEV_OFFSET) {
        Some(v) => v,
        None => return 0,
    };
    let sector = match tp_read_u64(&ctx, BLOCK_BIO_SECTOR_OFFSET) {
        Some(v) => v,
        None => return 0,
    };
    let key = pack_bio_track_key(dev, sector);

    let track = unsafe { &BIO_TRACK };
    let entry = match track.get(&key) {
        Some(e) => *e,
        None => return 0,
    };
    let _ = track.remove(&key);

    let now = unsafe { bpf_ktime_get_ns() };
    let latency_ns = now.saturating_sub(entry.start_ts);
    if latency_ns == 0 || latency_ns > BIO_ANOMALY_THRESHOLD_NS {
        return 0;
    }

    let stats_key = BioStatsKey {
        comm: entry.comm,
        bio_type: entry.bio_type,
    };
    let stats = unsafe { &BIO_STATS };
    if let Some(ptr) = stats.get_ptr_mut(&stats_key) {
        let v = unsafe { &mut *ptr };
        v.count += 1;
        v.total_bytes += entry.nr_bytes;
        v.total_ns += latency_ns;
        if latency_ns < v.min_ns || v.min_ns == 0 {
            v.min_ns = latency_ns;
        }
        if latency_ns > v.max_ns {
            v.max_ns = latency_ns;
        }
    } else {
        let _ = stats.insert(
            &stats_key,
            &BioStatsValue {
                count: 1,
                total_bytes: entry.nr_bytes,
                total_ns: latency_ns,
                min_ns: latency_ns,
                max_ns: latency_ns,
            },
            0,
        );
    }
    0
}

// ---------------------------------------------------------------------
// Open monitor
// ---------------------------------------------------------------------

#[map(name = "OPEN_TRACK")]
static mut OPEN_TRACK: HashMap<u32, OpenTrackEntry> =
    HashMap::with_max_entries(TRACK_MAP_CAPACITY, 0);

#[map(name = "OPEN_STATS")]
static mut OPEN_STATS: HashMap<OpenStatsKey, OpenStatsValue> =
    HashMap::with_max_entries(STATS_MAP_CAPACITY, 0);

/// The stats key is ~276 bytes, too large to build safely on the BPF
/// stack; it's assembled in this per-CPU scratch slot instead.
#[map(name = "OPEN_KEY_SCRATCH")]
static mut OPEN_KEY_SCRATCH: PerCpuArray<OpenStatsKey> = PerCpuArray::with_max_entries(1, 0);

#[kprobe(function = "do_sys_openat2")]
pub fn trace_open_entry(ctx: ProbeContext) -> u32 {
    try_trace_open_entry(ctx)
}

fn try_trace_open_entry(ctx: ProbeContext) -> u32 {
    let pid = ctx.pid();
    if pid == 0 {
        return 0;
    }
    let comm = bpf_get_current_comm().unwrap_or([0u8; 16]);
    let mut entry = OpenTrackEntry::zeroed();
    entry.start_ts = unsafe { bpf_ktime_get_ns() };
    entry.comm = comm;
    entry.operation = open_op::OPENAT;

    // arg(1) is the `const char __user *filename` for do_sys_openat2.
    if let Some(filename_ptr) = ctx.arg::<*const u8>(1) {
        let _ = unsafe { bpf_probe_read_kernel_str_bytes(filename_ptr, &mut entry.filename) };
    }

    let track = unsafe { &OPEN_TRACK };
    let _ = track.insert(&pid, &entry, 0);
    0
}

#[kretprobe(function = "do_sys_openat2")]
pub fn trace_open_exit(ctx: ProbeContext) -> u32 {
    try_trace_open_exit(ctx)
}

fn try_trace_open_exit(ctx: ProbeContext) -> u32 {
    let pid = ctx.pid();
    let track = unsafe { &OPEN_TRACK };
    let entry = match track.get(&pid) {
        Some(e) => *e,
        None => return 0,
    };
    let _ = track.remove(&pid);

    let now = unsafe { bpf_ktime_get_ns() };
    let latency = now.saturating_sub(entry.start_ts);
    let ret: i64 = ctx.ret().unwrap_or(0);
    let errored = ret < 0;

    let scratch = unsafe { &OPEN_KEY_SCRATCH };
    let key_ptr = match scratch.get_ptr_mut(0) {
        Some(p) => p,
        None => return 0,
    };
    let key = unsafe { &mut *key_ptr };
    key.comm = entry.comm;
    key.operation = entry.operation;
    key.filename = entry.filename;

    let stats = unsafe { &OPEN_STATS };
    if let Some(ptr) = stats.get_ptr_mut(key) {
        let v = unsafe { &mut *ptr };
        v.count += 1;
        if errored {
            v.error_count += 1;
        }
        v.total_lat += latency;
        if latency < v.min_lat || v.min_lat == 0 {
            v.min_lat = latency;
        }
        if latency > v.max_lat {
            v.max_lat = latency;
        }
    } else {
        let _ = stats.insert(key, &OpenStatsValue::new(latency, errored, entry.flags), 0);
    }
    0
}

// ---------------------------------------------------------------------
// Interrupt monitor
// ---------------------------------------------------------------------

#[map(name = "INTERRUPT_STATS")]
static mut INTERRUPT_STATS: HashMap<InterruptKey, InterruptValue> =
    HashMap::with_max_entries(STATS_MAP_CAPACITY, 0);

fn bump_interrupt(irq_type_bits: u32) {
    let comm = bpf_get_current_comm().unwrap_or([0u8; 16]);
    let cpu = unsafe { aya_ebpf::helpers::bpf_get_smp_processor_id() };
    let key = InterruptKey {
        comm,
        irq_type: irq_type_bits,
        cpu,
    };
    let stats = unsafe { &INTERRUPT_STATS };
    if let Some(ptr) = stats.get_ptr_mut(&key) {
        unsafe { (*ptr).count += 1 };
    } else {
        let _ = stats.insert(&key, &InterruptValue { count: 1 }, 0);
    }
}

#[tracepoint(category = "irq", name = "irq_handler_entry")]
pub fn trace_irq_hardware(ctx: TracePointContext) -> u32 {
    let _ = ctx;
    bump_interrupt(irq_type::HARDWARE);
    0
}

#[tracepoint(category = "irq", name = "softirq_entry")]
pub fn trace_irq_softirq(ctx: TracePointContext) -> u32 {
    // `vec` (softirq number) is a 32-bit field right after the common
    // tracepoint header; low vectors map to timer/net/block per the
    // kernel's static softirq table.
    let vec_nr = tp_read_u32(&ctx, 8).unwrap_or(u32::MAX);
    let bits = match vec_nr {
        1 => irq_type::SOFTWARE | irq_type::TIMER,
        3 | 4 => irq_type::SOFTWARE | irq_type::NETWORK,
        6 => irq_type::SOFTWARE | irq_type::BLOCK,
        _ => irq_type::SOFTWARE,
    };
    bump_interrupt(bits);
    0
}

// ---------------------------------------------------------------------
// PageFault monitor
// ---------------------------------------------------------------------

const PAGE_FAULT_MIN_INTERVAL_NS: u64 = 50_000_000;

#[map(name = "PAGE_FAULT_THROTTLE")]
static mut PAGE_FAULT_THROTTLE: HashMap<u32, u64> = HashMap::with_max_entries(65_536, 0);

#[map(name = "PAGE_FAULT_STATS")]
static mut PAGE_FAULT_STATS: HashMap<PageFaultKey, PageFaultValue> =
    HashMap::with_max_entries(STATS_MAP_CAPACITY, 0);

fn throttle_page_fault(pid: u32, now: u64) -> bool {
    let state = unsafe { &PAGE_FAULT_THROTTLE };
    if let Some(ptr) = state.get_ptr_mut(&pid) {
        let last = unsafe { &mut *ptr };
        if now.saturating_sub(*last) < PAGE_FAULT_MIN_INTERVAL_NS {
            return false;
        }
        *last = now;
        true
    } else {
        let _ = state.insert(&pid, &now, 0);
        true
    }
}

#[btf_tracepoint(function = "page_fault_user")]
pub fn trace_page_fault_user(ctx: BtfTracePointContext) -> u32 {
    try_trace_page_fault(ctx, true)
}

#[btf_tracepoint(function = "page_fault_kernel")]
pub fn trace_page_fault_kernel(ctx: BtfTracePointContext) -> u32 {
    try_trace_page_fault(ctx, false)
}

fn try_trace_page_fault(ctx: BtfTracePointContext, is_user: bool) -> u32 {
    let error_code: u64 = unsafe { ctx.arg(2) };
    let now = unsafe { bpf_ktime_get_ns() };
    let pid = ctx.pid();
    if pid == 0 {
        return 0;
    }
    if !throttle_page_fault(pid, now) {
        return 0;
    }

    let comm = bpf_get_current_comm().unwrap_or([0u8; 16]);
    let cpu = unsafe { aya_ebpf::helpers::bpf_get_smp_processor_id() };
    let key = PageFaultKey {
        comm,
        fault_type: fault_type_from_error_code(error_code, is_user),
        cpu,
    };
    let stats = unsafe { &PAGE_FAULT_STATS };
    if let Some(ptr) = stats.get_ptr_mut(&key) {
        unsafe { (*ptr).count += 1 };
    } else {
        let _ = stats.insert(&key, &PageFaultValue { count: 1 }, 0);
    }
    0
}

// ---------------------------------------------------------------------
// ContextSwitch monitor
// ---------------------------------------------------------------------

#[map(name = "CONTEXT_SWITCH_STATS")]
static mut CONTEXT_SWITCH_STATS: HashMap<ContextSwitchKey, ContextSwitchValue> =
    HashMap::with_max_entries(STATS_MAP_CAPACITY, 0);

#[tracepoint(category = "sched", name = "sched_switch")]
pub fn trace_context_switch(ctx: TracePointContext) -> u32 {
    try_trace_context_switch(ctx)
}

fn try_trace_context_switch(ctx: TracePointContext) -> u32 {
    // sched_switch layout: header(8) + prev_comm[16] + prev_pid(4) +
    // prev_prio(4) + prev_state(8, long) + next_comm[16] + next_pid(4) + ...
    const PREV_COMM_OFFSET: usize = 8;
    const PREV_STATE_OFFSET: usize = 8 + 16 + 4 + 4;
    const NEXT_COMM_OFFSET: usize = PREV_STATE_OFFSET + 8;

    let prev_state: i64 = unsafe { ctx.read_at(PREV_STATE_OFFSET).unwrap_or(0) };
    let cpu = unsafe { aya_ebpf::helpers::bpf_get_smp_processor_id() };

    // TASK_RUNNING == 0: preempted mid-run (involuntary). Anything else
    // means the previous task blocked itself (voluntary).
    let prev_comm: [u8; 16] = unsafe { ctx.read_at(PREV_COMM_OFFSET).unwrap_or([0u8; 16]) };
    let prev_key = ContextSwitchKey {
        comm: prev_comm,
        cpu,
    };
    bump_switch(&prev_key, false, prev_state == 0, prev_state != 0);

    let next_comm: [u8; 16] = unsafe { ctx.read_at(NEXT_COMM_OFFSET).unwrap_or([0u8; 16]) };
    let next_key = ContextSwitchKey {
        comm: next_comm,
        cpu,
    };
    bump_switch(&next_key, true, false, false);
    0
}

fn bump_switch(key: &ContextSwitchKey, switching_in: bool, involuntary: bool, voluntary: bool) {
    let stats = unsafe { &CONTEXT_SWITCH_STATS };
    if let Some(ptr) = stats.get_ptr_mut(key) {
        let v = unsafe { &mut *ptr };
        if switching_in {
            v.switch_in_count += 1;
        } else {
            v.switch_out_count += 1;
            if involuntary {
                v.involuntary_count += 1;
            }
            if voluntary {
                v.voluntary_count += 1;
            }
        }
    } else {
        let _ = stats.insert(
            key,
            &ContextSwitchValue {
                switch_in_count: if switching_in { 1 } else { 0 },
                switch_out_count: if switching_in { 0 } else { 1 },
                voluntary_count: if voluntary { 1 } else { 0 },
                involuntary_count: if involuntary { 1 } else { 0 },
            },
            0,
        );
    }
}

#[cfg(all(not(test), target_arch = "bpf"))]
#[panic_handler]
fn panic(_: &core::panic::PanicInfo) -> ! {
    loop {}
}

#[link_section = "license"]
#[no_mangle]
static LICENSE: [u8; 4] = *b"GPL\0";
