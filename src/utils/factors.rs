use log::debug;

/// Prime factors of `n` in ascending order, with multiplicity.
pub fn prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    let mut div = 2;
    while div <= n / div {
        if n % div == 0 {
            factors.push(div);
            n /= div;
        } else {
            div += 1;
        }
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

/// All divisors of `n` in ascending order. Empty for zero.
pub fn divisors(n: u64) -> Vec<u64> {
    if n == 0 {
        return Vec::new();
    }

    let mut result = vec![1];
    let primes = prime_factors(n);
    let mut i = 0;
    while let Some(&p) = primes.get(i) {
        let multiplicity = primes.iter().skip(i).take_while(|&&q| q == p).count();
        let base_len = result.len();
        let mut power = 1;
        for _ in 0..multiplicity {
            power *= p;
            for j in 0..base_len {
                if let Some(&d) = result.get(j) {
                    result.push(d * power);
                }
            }
        }
        i += multiplicity;
    }

    result.sort_unstable();
    debug!("{} has {} divisors", n, result.len());
    result
}
