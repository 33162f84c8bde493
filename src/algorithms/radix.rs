//! LSD radix sort, one byte per pass

use super::SortError;

pub fn sort(data: &mut Vec<u32>) -> Result<(), SortError> {
    if data.len() < 2 {
        return Ok(());
    }

    let mut buffer = vec![0u32; data.len()];
    for shift in (0..32).step_by(8) {
        let mut counts = [0usize; 256];
        for &value in data.iter() {
            counts[((value >> shift) & 0xFF) as usize] += 1;
        }

        // Every key shares this byte; the pass would be a no-op
        if counts.iter().any(|&c| c == data.len()) {
            continue;
        }

        let mut offset = 0;
        for count in counts.iter_mut() {
            let c = *count;
            *count = offset;
            offset += c;
        }
        for &value in data.iter() {
            let bucket = ((value >> shift) & 0xFF) as usize;
            buffer[counts[bucket]] = value;
            counts[bucket] += 1;
        }
        std::mem::swap(data, &mut buffer);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radix_full_range() {
        let mut data = vec![u32::MAX, 0, 1 << 24, 255, 256, 1 << 16, u32::MAX - 1];
        let mut expected = data.clone();
        expected.sort();
        sort(&mut data).unwrap();
        assert_eq!(data, expected);
    }
}
