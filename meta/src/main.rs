fn main() {
    multiversx_sc_meta_lib::cli_main::<campus_ledger::AbiProvider>();
}
