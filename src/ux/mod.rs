//! UX design collaborator agent.
//!
//! Produces fixed design-guidance documents around a user request or feature.

use crate::types::{AgentError, Result};

const NO_CONTEXT: &str = "No additional context provided";

pub const CAPABILITIES: &str = "# UX Design Collaborator Agent

## Capabilities
- **Design Analysis**: Analyze design requests and provide UX guidance
- **Wireframe Guidance**: Generate wireframe recommendations for features
- **Design System Alignment**: Ensure consistency with design patterns
- **Accessibility Review**: WCAG compliance and inclusive design
- **Agile Integration**: Design guidance that fits sprint cycles

## Usage Patterns
- Dashboard and data visualization design
- User flow validation and optimization
- Accessibility compliance review
- Design system evolution and consistency
- Cross-functional collaboration in agile teams

## Core Principles
- User-centered design approach
- Systems thinking for cohesive experiences
- Technical collaboration with development teams
- Iterative design and validation methodology
";

#[derive(Debug, Clone, Copy, Default)]
pub struct UxCollaborator;

impl UxCollaborator {
    /// UX analysis of a design request
    pub fn analyze(&self, request: Option<&str>, context: Option<&str>) -> Result<String> {
        let request = required(request, "Request is required for analysis")?;
        let context = context
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(NO_CONTEXT);

        Ok(format!(
            "# UX Design Analysis

## Request Summary
{request}

## Context
{context}

## Design Recommendations

### User-Centered Approach
- Start with user research and persona validation
- Consider accessibility (WCAG guidelines)
- Test with real users early and often

### Design System Alignment
- Ensure consistency with existing patterns
- Leverage established component library
- Maintain visual and interaction coherence

### Technical Feasibility
- Collaborate with development team on constraints
- Consider performance implications
- Plan for responsive design across devices

### Agile Integration
- Break into iterative, testable components
- Plan for sprint cycles and delivery milestones
- Include validation checkpoints

## Next Steps
1. **Research Phase**: Validate user needs and constraints
2. **Wireframe Creation**: Design low-fidelity layouts
3. **Prototype Development**: Create interactive mockups
4. **User Testing**: Validate with target users
5. **Implementation Planning**: Collaborate with development team

## Success Metrics
- User task completion rates
- Time to complete key workflows
- Accessibility compliance scores
- Design system consistency metrics
"
        ))
    }

    /// Wireframe guidance for a named feature
    pub fn wireframe(&self, feature: Option<&str>) -> Result<String> {
        let feature = required(feature, "Feature name is required for wireframe guidance")?;

        Ok(format!(
            "# Wireframe Guidance: {feature}

## Layout Considerations
- Information hierarchy and visual flow
- Content organization and grouping
- Navigation patterns and breadcrumbs
- Responsive breakpoints and mobile-first design

## Interaction Design
- User actions and feedback states
- Error handling and validation
- Loading states and progressive disclosure
- Accessibility considerations (focus states, screen readers)

## Component Recommendations
- Use established design system components
- Consider reusable patterns for scalability
- Plan for internationalization and localization
- Include micro-interactions for delight

## Technical Notes
- Consider performance implications of design choices
- Plan for API integration points
- Include data loading and error states
- Consider offline functionality if relevant
"
        ))
    }
}

fn required<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AgentError::InvalidInput(message.to_string()))
}
