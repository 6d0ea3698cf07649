//! Image gallery section below the carousel

use leptos::prelude::*;

use crate::types::Gallery;

/// Titled grid of gallery tiles. Renders nothing for an empty gallery.
#[component]
pub fn GallerySection(gallery: Gallery) -> impl IntoView {
    if gallery.images.is_empty() {
        return view! { "" }.into_any();
    }

    view! {
        <section class="gallery">
            <div class="container">
                <h2 class="section-title">{gallery.title}</h2>
                <div class="gallery-grid">
                    {gallery
                        .images
                        .into_iter()
                        .map(|image| {
                            view! {
                                <div class="gallery-tile">
                                    <img
                                        src=image.src
                                        alt=image.alt
                                        width="500"
                                        height="300"
                                        loading="lazy"
                                    />
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GalleryImage;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_tiles_in_order() {
        let gallery = Gallery {
            title: "VPAS项目详细介绍".into(),
            images: vec![
                GalleryImage {
                    src: "/images/vpas/image-1.png".into(),
                    alt: "申请条件".into(),
                },
                GalleryImage {
                    src: "/images/vpas/image-2.png".into(),
                    alt: "VPAS留港签证".into(),
                },
            ],
        };
        let html = view! { <GallerySection gallery=gallery /> }.to_html();

        assert!(html.contains("VPAS项目详细介绍"));
        assert_eq!(html.matches("gallery-tile").count(), 2);
        let first = html.find("image-1.png").unwrap();
        let second = html.find("image-2.png").unwrap();
        assert!(first < second);
    }

    #[test]
    fn empty_gallery_renders_nothing() {
        let html = view! { <GallerySection gallery=Gallery::default() /> }.to_html();
        assert!(!html.contains("gallery"));
    }
}
