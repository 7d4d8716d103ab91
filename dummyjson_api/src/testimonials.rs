use crate::types::Testimonial;

const TESTIMONIALS: [(&str, &str); 3] = [
    (
        "I recently purchased a dress from this online store and was blown away by the quality and fit. It was even better than I expected and I received so many compliments when I wore it. I'll definitely be back for more!",
        "Sarah D.",
    ),
    (
        "I was hesitant to order a piece of furniture online, but the team at this online store made the process so easy and hassle-free. The item arrived on time and in perfect condition, and it looks amazing in my home. I highly recommend this store for their excellent customer service and high-quality products.",
        "John P.",
    ),
    (
        "I'm always on the lookout for the latest tech gadgets, and this online store has an amazing selection. I ordered a new smartwatch and it arrived quickly and was exactly what I was looking for. The prices are also very competitive, so I know I'm getting a great deal. I'm already browsing their site for my next purchase!",
        "Emily R.",
    ),
];

/// The fixed customer testimonials shown on the storefront.
pub fn testimonials() -> Vec<Testimonial> {
    TESTIMONIALS
        .iter()
        .map(|(text, source)| Testimonial {
            text: text.to_string(),
            source: source.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::testimonials;

    #[test]
    fn three_attributed_testimonials() {
        let sources: Vec<String> = testimonials().into_iter().map(|t| t.source).collect();
        assert_eq!(sources, vec!["Sarah D.", "John P.", "Emily R."]);
    }

    #[test]
    fn output_is_stable() {
        assert_eq!(testimonials(), testimonials());
        assert!(testimonials().iter().all(|t| !t.text.is_empty()));
    }
}
