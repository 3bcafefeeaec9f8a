use super::memory::{ExecutableMemory, page_size, round_to_page};

#[test]
fn page_size_is_a_power_of_two() {
    let page = page_size();

    assert!(page >= 4096);
    assert!(page.is_power_of_two());
}

#[test]
fn lengths_round_up_to_whole_pages() {
    assert_eq!(round_to_page(0, 4096), 4096);
    assert_eq!(round_to_page(1, 4096), 4096);
    assert_eq!(round_to_page(4096, 4096), 4096);
    assert_eq!(round_to_page(4097, 4096), 8192);
    assert_eq!(round_to_page(3 * 16384, 16384), 3 * 16384);
}

#[test]
fn mapping_holds_a_copy_of_the_code() {
    let code = [0xB8, 0x2A, 0x00, 0x00, 0x00, 0xC3];

    let memory = ExecutableMemory::new(&code).unwrap();

    assert_eq!(memory.as_bytes(), &code);
    assert_eq!(memory.len(), 6);
    assert!(!memory.is_empty());
    assert_eq!(memory.mapped_len(), page_size());
    assert_eq!(memory.as_ptr() as usize % page_size(), 0);
}

#[test]
fn large_code_spans_several_pages() {
    let code = vec![0xC3; page_size() * 2 + 1];

    let memory = ExecutableMemory::new(&code).unwrap();

    assert_eq!(memory.mapped_len(), page_size() * 3);
    assert_eq!(memory.as_bytes().len(), code.len());
}

#[test]
fn empty_code_still_maps_a_page() {
    let memory = ExecutableMemory::new(&[]).unwrap();

    assert!(memory.is_empty());
    assert_eq!(memory.mapped_len(), page_size());
}
