//! Static seed lists for each tab

use super::item::Item;
use super::ui::Tab;

/// (title, description, category, icon)
type Seed = (&'static str, &'static str, &'static str, &'static str);

const CONTENT_SEEDS: [Seed; 10] = [
    ("Text Content", "Manage all text content including headings, paragraphs, and inline text formatting options.", "text", "text"),
    ("Rich Text Editor", "Advanced WYSIWYG editor with formatting tools and collaborative editing features.", "text", "editor"),
    ("Image Management", "Upload, resize, crop, and optimize images with automatic compression.", "media", "image"),
    ("Video Integration", "Embed videos from YouTube, Vimeo, or upload custom videos with playback controls.", "media", "video"),
    ("Interactive Buttons", "Create custom buttons with hover effects, animations, and click actions.", "interactive", "button"),
    ("Form Builder", "Build complex forms with validation rules and submission handling.", "interactive", "form"),
    ("Analytics Dashboard", "Create organized data tables and charts with sorting and pagination features.", "data", "chart"),
    ("Icon Library", "Access thousands of icons with customizable sizes and colors.", "media", "icons"),
    ("Media Gallery", "Create stunning galleries with lightbox effects and navigation.", "media", "gallery"),
    ("Content Templates", "Design reusable content templates for consistent formatting.", "text", "template"),
];

const DESIGN_SEEDS: [Seed; 10] = [
    ("Sizing", "Control width, height, and responsive sizing with breakpoint-specific values.", "layout", "size"),
    ("Spacing", "Manage margins, padding, and gaps with consistent spacing scales.", "layout", "spacing"),
    ("Border", "Create custom borders with advanced styling and radius controls.", "decoration", "border"),
    ("Box Shadow", "Apply sophisticated shadow effects with multiple layers and presets.", "decoration", "shadow"),
    ("Filters", "Apply visual filters including blur, brightness, and color adjustments.", "effects", "filter"),
    ("Transform", "Apply 2D and 3D transformations with precise positioning control.", "effects", "transform"),
    ("Background", "Design complex backgrounds with gradients, patterns, and images.", "decoration", "background"),
    ("Typography", "Complete typography control with responsive font scaling.", "typography", "font"),
    ("Colors", "Advanced color management with themes and accessibility compliance.", "typography", "palette"),
    ("Layout Grid", "Powerful CSS Grid and Flexbox layout tools with visual editor.", "layout", "grid"),
];

const ADVANCED_SEEDS: [Seed; 10] = [
    ("Custom CSS", "Write custom CSS with syntax highlighting and real-time preview.", "code", "code"),
    ("Animation", "Create complex animations with keyframe editor and timing controls.", "effects", "motion"),
    ("Responsive Design", "Advanced responsive design tools with custom breakpoints.", "layout", "responsive"),
    ("JavaScript", "Embed custom JavaScript for interactive behaviors.", "code", "script"),
    ("Performance", "Monitor and optimize performance with advanced metrics.", "optimization", "gauge"),
    ("SEO Settings", "Complete SEO setup with meta tags and structured data.", "optimization", "search"),
    ("Accessibility", "Ensure WCAG compliance with accessibility auditing tools.", "compliance", "access"),
    ("API Integration", "Connect to external APIs with authentication and error handling.", "code", "plug"),
    ("Security", "Configure security headers and data protection measures.", "compliance", "lock"),
    ("Analytics", "Integrate analytics tracking with privacy-compliant setup.", "optimization", "stats"),
];

/// Read-only seed lists, one per tab
#[derive(Debug, Clone)]
pub struct Catalog {
    content: Vec<Item>,
    design: Vec<Item>,
    advanced: Vec<Item>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Catalog {
    /// Build the catalog from the built-in seed lists
    pub fn seeded() -> Self {
        Self {
            content: build(&CONTENT_SEEDS),
            design: build(&DESIGN_SEEDS),
            advanced: build(&ADVANCED_SEEDS),
        }
    }

    /// Items of a tab in seed order
    pub fn items(&self, tab: Tab) -> &[Item] {
        match tab {
            Tab::Content => &self.content,
            Tab::Design => &self.design,
            Tab::Advanced => &self.advanced,
        }
    }

    /// Distinct category tags of a tab, sorted
    pub fn tags(&self, tab: Tab) -> Vec<String> {
        let mut tags: Vec<String> = self
            .items(tab)
            .iter()
            .map(|item| item.category.clone())
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }

    pub fn has_tag(&self, tab: Tab, tag: &str) -> bool {
        self.items(tab).iter().any(|item| item.category == tag)
    }
}

fn build(seeds: &[Seed]) -> Vec<Item> {
    seeds
        .iter()
        .enumerate()
        .map(|(index, (title, description, category, icon))| {
            Item::new(index, title, description, category, icon)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tab_has_ten_items_in_order() {
        let catalog = Catalog::seeded();
        for tab in Tab::all() {
            let items = catalog.items(tab);
            assert_eq!(items.len(), 10);
            for (i, item) in items.iter().enumerate() {
                assert_eq!(item.original_index, i);
                assert!(!item.expanded);
            }
        }
    }

    #[test]
    fn test_tags_are_sorted_and_unique() {
        let catalog = Catalog::seeded();
        let tags = catalog.tags(Tab::Content);
        assert_eq!(tags, vec!["data", "interactive", "media", "text"]);
        assert!(catalog.has_tag(Tab::Design, "layout"));
        assert!(!catalog.has_tag(Tab::Design, "media"));
    }
}
