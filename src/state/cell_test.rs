use super::*;

#[test]
fn memory_cell_clones_share_value() {
    let cell = MemoryCell::new(1_u32);
    let other = cell.clone();
    other.modify(|v| *v += 41);
    assert_eq!(cell.snapshot(), 42);
}

#[test]
fn memory_cell_default_uses_inner_default() {
    let cell: MemoryCell<Vec<String>> = MemoryCell::default();
    assert!(cell.snapshot().is_empty());
}
