//! Encoded filter-list catalog
//!
//! Selectors are stored base64-encoded so that blocker rules keyed on the
//! literal strings do not match this file. Only single-element selectors are
//! allowed. `embed` and `position: fixed` elements always lack an offset
//! parent and would read as blocked; `iframe` and `[src=]` selectors trigger
//! network requests. Avoid all of them.

pub const ENCODED_LISTS: &[(&str, &[&str])] = &[
    (
        "abpIndo",
        &[
            "I0lrbGFuLU1lbGF5YW5n",
            "I0tvbG9tLUlrbGFuLTcyOA==",
            "I1NpZGViYXJJa2xhbi13cmFwcGVy",
            "YVt0aXRsZT0iN25hZ2EgcG9rZXIiIGld",
            "W3RpdGxlPSJBTElFTkJPTEEiIGld",
        ],
    ),
    (
        "abpvn",
        &[
            "I3F1YW5nY2FvbWI=",
            "Lmktc2FpZC1uby10aGluZy1jYW4tc3RvcC1tZS13YXJuaW5nLmRhcms=",
            "LnF1YW5nY2Fv",
            "W2hyZWZePSJodHRwczovL3I4OC52bi8iXQ==",
            "W2hyZWZePSJodHRwczovL3piZXQudm4vIl0=",
        ],
    ),
    (
        "adBlockFinland",
        &[
            "Lm1haW5vc3RpbGE=",
            "LnNwb25zb3JpdA==",
            "LnlsYW1haW5vcw==",
            "YVtocmVmKj0iL2NsaWNrdGhyZ2guYXNwPyJd",
            "YVtocmVmXj0iaHR0cHM6Ly9hcHAucmVhZHBlYWsuY29tL2FkcyJd",
        ],
    ),
    (
        "adBlockPersian",
        &[
            "I25hdmJhcl9ub3RpY2VfNTA=",
            "YVtocmVmXj0iaHR0cHM6Ly9pcW9wdGlvbi5jb20vbHAvbW9iaWxlLXBhcnRuZXIvP2FmZj0iXQ==",
            "LmthZHI=",
            "VEFCTEVbd2lkdGg9IjE0MHB4Il0=",
            "I2RpdkFnYWhp",
        ],
    ),
    (
        "adBlockWarningRemoval",
        &[
            "I2FkYmxvY2tfbWVzc2FnZQ==",
            "LmFkYmxvY2tJbmZv",
            "LmRlYWRibG9ja2VyLWhlYWRlci1iYXI=",
            "Lm5vLWFkLXJlbWluZGVy",
            "I0FkQmxvY2tEaWFsb2c=",
        ],
    ),
    (
        "adGuardAnnoyances",
        &[
            "YW1wLWVtYmVkW3R5cGU9InplbiJd",
            "LmhzLXNvc3lhbA==",
            "I2Nvb2tpZWNvbnNlbnRkaXY=",
            "ZGl2W2NsYXNzXj0iYXBwX2dkcHIiXQ==",
            "LmFzLW9pbA==",
        ],
    ),
    (
        "adGuardBase",
        &[
            "I2dhZHNfbWlkZGxl",
            "LnRqYWRz",
            "LkJldHRlckpzUG9wT3ZlcmxheQ==",
            "I2FkXzMwMFgyNTA=",
            "I2Jhbm5lcmZsb2F0MjI=",
        ],
    ),
    (
        "adGuardChinese",
        &[
            "YVtocmVmKj0iLjEyM2NoLmNuIl0=",
            "YVtocmVmKj0iLnR0ejUuY24iXQ==",
            "YVtocmVmKj0iLnlhYm92aXAyMDI3LmNvbS8iXQ==",
            "LnRtM2FsbDJoNGI=",
            "I2otbmV3LWFk",
        ],
    ),
    (
        "adGuardFrench",
        &[
            "I2Rpdl9iYW5uaWVyZV9wdWI=",
            "YVtocmVmXj0iaHR0cHM6Ly9zZWN1cmUuc2VjdXJpdGV0b3RhbGUuZnIvIl0=",
            "YVtocmVmKj0iZmR1Y2tzLmNvbS8iXQ==",
            "YVtocmVmXj0iaHR0cDovL2ZydHlkLmNvbS8iXQ==",
            "LnB1YmxpY2l0ZTE=",
        ],
    ),
    (
        "adGuardGerman",
        &[
            "LmJhbm5lcml0ZW13ZXJidW5nX2hlYWRfMQ==",
            "LmJveHN0YXJ0d2VyYnVuZw==",
            "LndlcmJ1bmcz",
            "YVtocmVmXj0iaHR0cDovL3d3dy5pY2h3dWVyZGUuY29tLz9yZWY9Il0=",
            "YVtocmVmXj0iaHR0cDovL3BhcnRuZXJzLmFka2xpY2suZGUvdHJhY2tpbmcucGhwPyJd",
        ],
    ),
    (
        "adGuardJapanese",
        &[
            "LmFkLXRleHQtYmxvY2tBMDE=",
            "Ll9wb3BJbl9pbmZpbml0ZV92aWRlbw==",
            "W2NsYXNzXj1ibG9ncm9sbF93cmFwcGVyXQ==",
            "YVtocmVmXj0iaHR0cDovL2FkMi50cmFmZmljZ2F0ZS5uZXQvIl0=",
            "YVtocmVmXj0iaHR0cDovL3d3dy5yc3NhZC5qcC8iXQ==",
        ],
    ),
    (
        "adGuardMobile",
        &[
            "YW1wLWF1dG8tYWRz",
            "I21naWRfaWZyYW1l",
            "LmFtcF9hZA==",
            "YW1wLXN0aWNreS1hZA==",
            "LnBsdWdpbi1ibG9ncm9sbA==",
        ],
    ),
    (
        "adGuardRussian",
        &[
            "YVtocmVmXj0iaHR0cHM6Ly95YS1kaXN0cmliLnJ1L3IvIl0=",
            "W29uY2xpY2sqPSIudHdrdi5ydSJd",
            "LnJlY2xhbWE=",
            "ZGl2W2lkXj0ic21pMmFkYmxvY2siXQ==",
            "ZGl2W2lkXj0iQWRGb3hfYmFubmVyXyJd",
        ],
    ),
    (
        "adGuardSocial",
        &[
            "YVtocmVmXj0iLy93d3cuc3R1bWJsZXVwb24uY29tL3N1Ym1pdD91cmw9Il0=",
            "YVtocmVmXj0iLy90ZWxlZ3JhbS5tZS9zaGFyZS91cmw/Il0=",
            "LmV0c3ktdHdlZXQ=",
            "I2lubGluZVNoYXJl",
            "LnBvcHVwLXNvY2lhbA==",
        ],
    ),
    (
        "adGuardSpanishPortuguese",
        &[
            "I2JhcnJhUHVibGljaWRhZGU=",
            "I1B1YmxpY2lkYWRl",
            "I3B1YmxpRXNwZWNpYWw=",
            "I3F1ZVRvb2x0aXA=",
            "W2hyZWZePSJodHRwOi8vYWRzLmdsaXNwYS5jb20vIl0=",
        ],
    ),
    (
        "adGuardTrackingProtection",
        &[
            "YW1wLWVtYmVkW3R5cGU9InRhYm9vbGEiXQ==",
            "I3Fvby1jb3VudGVy",
            "YVtocmVmXj0iaHR0cDovL2NsaWNrLmhvdGxvZy5ydS8iXQ==",
            "YVtocmVmXj0iaHR0cDovL2hpdGNvdW50ZXIucnUvdG9wL3N0YXQucGhwIl0=",
            "YVtocmVmXj0iaHR0cDovL3RvcC5tYWlsLnJ1L2p1bXAiXQ==",
        ],
    ),
    (
        "adGuardTurkish",
        &[
            "I2JhY2trYXBhdA==",
            "I3Jla2xhbWk=",
            "YVtocmVmXj0iaHR0cDovL2Fkc2Vydi5vbnRlay5jb20udHIvIl0=",
            "YVtocmVmXj0iaHR0cDovL2l6bGVuemkuY29tL2NhbXBhaWduLyJd",
            "YVtocmVmXj0iaHR0cDovL3d3dy5pbnN0YWxsYWRzLm5ldC8iXQ==",
        ],
    ),
    (
        "bulgarian",
        &[
            "dGQjZnJlZW5ldF90YWJsZV9hZHM=",
            "I25ld0Fk",
            "I2VhX2ludGV4dF9kaXY=",
            "LmxhcG5pLXBvcC1vdmVy",
            "I3hlbml1bV9ob3Rfb2ZmZXJz",
        ],
    ),
    (
        "easyList",
        &[
            "W2xhenktYWQ9ImxlZnR0aGluX2Jhbm5lciJd",
            "I2FkXzMwMHgyNTBfMg==",
            "I2ludGVyc3RpdGlhbEFk",
            "I3dpZGVfYWRfdW5pdA==",
            "LnNob3djYXNlQWQ=",
        ],
    ),
    (
        "easyListChina",
        &[
            "YVtocmVmKj0iLndlbnNpeHVldGFuZy5jb20vIl0=",
            "QVtocmVmKj0iL2h0aDEwNy5jb20vIl0=",
            "LmFwcGd1aWRlLXdyYXBbb25jbGljayo9ImJjZWJvcy5jb20iXQ==",
            "LmZyb250cGFnZUFkdk0=",
            "I3Rhb3Rhb2xl",
        ],
    ),
    (
        "easyListCookie",
        &[
            "I0Nvb2tpZUVV",
            "I19fY29va2llc18=",
            "I2xlc19jb29raWVz",
            "LmFzc2V0X2JhbGFOb3RpZmljYXRpb24=",
            "LmdkcHItdGFi",
        ],
    ),
    (
        "easyListCzechSlovak",
        &[
            "I29ubGFqbnktc3RpY2tlcnM=",
            "I3Jla2xhbW5pLWJveA==",
            "LnJla2xhbWEtbWVnYWJvYXJk",
            "LnNrbGlr",
            "W2lkXj0ic2tsaWtSZWtsYW1hIl0=",
        ],
    ),
    (
        "easyListDutch",
        &[
            "I2FkdmVydGVudGll",
            "I3ZpcEFkbWFya3RCYW5uZXJCbG9jaw==",
            "LmFkc3Rla3N0",
            "YVtocmVmXj0iaHR0cDovL2Fkc2VydmVyLndlYmFkcy5ubC9hZGNsaWNrLyJd",
            "I3NlbWlsby1scmVjdGFuZ2xl",
        ],
    ),
    (
        "easyListGermany",
        &[
            "I0x4V2VyYmV0ZWFzZXI=",
            "YVtocmVmXj0iaHR0cDovL3d3dy5rb250YWt0LXZlcm1pdHRsZXIuZGUvP3dtPSJd",
            "LndlcmJ1bmczMDE=",
            "LmFkc19idWVyb2tsYW1tZXI=",
            "I1dlcmJ1bmdfU2t5",
        ],
    ),
    (
        "easyListItaly",
        &[
            "LmJveF9hZHZfYW5udW5jaQ==",
            "LnNiLWJveC1wdWJibGlyZWRhemlvbmFsZQ==",
            "YVtocmVmXj0iaHR0cDovL2FmZmlsaWF6aW9uaWFkcy5zbmFpLml0LyJd",
            "YVtocmVmXj0iaHR0cHM6Ly9hZHNlcnZlci5odG1sLml0LyJd",
            "YVtocmVmXj0iaHR0cHM6Ly9hZmZpbGlhemlvbmlhZHMuc25haS5pdC8iXQ==",
        ],
    ),
    (
        "easyListLithuania",
        &[
            "LnJla2xhbW9zX3RhcnBhcw==",
            "LnJla2xhbW9zX251b3JvZG9z",
            "aW1nW2FsdD0iUmVrbGFtaW5pcyBza3lkZWxpcyJd",
            "aW1nW2FsdD0iRGVkaWt1b3RpLmx0IHNlcnZlcmlhaSJd",
            "aW1nW2FsdD0iSG9zdGluZ2FzIFNlcnZlcmlhaS5sdCJd",
        ],
    ),
    (
        "estonian",
        &[
            "QVtocmVmKj0iaHR0cDovL3BheTRyZXN1bHRzMjQuZXUiXQ==",
        ],
    ),
    (
        "fanboyAnnoyances",
        &[
            "I2ZlZWRiYWNrLXRhYg==",
            "I3RhYm9vbGEtYmVsb3ctYXJ0aWNsZQ==",
            "LmZlZWRidXJuZXJGZWVkQmxvY2s=",
            "LndpZGdldC1mZWVkYnVybmVyLWNvdW50ZXI=",
            "W3RpdGxlPSJTdWJzY3JpYmUgdG8gb3VyIGJsb2ciXQ==",
        ],
    ),
    (
        "fanboyAntiFacebook",
        &[
            "LnV0aWwtYmFyLW1vZHVsZS1maXJlZmx5LXZpc2libGU=",
        ],
    ),
    (
        "fanboyEnhancedTrackers",
        &[
            "Lm9wZW4ucHVzaE1vZGFs",
            "I2lzc3VlbS1sZWFreS1wYXl3YWxsLWFydGljbGVzLXplcm8tcmVtYWluaW5nLW5hZw==",
            "ZGl2W3N0eWxlKj0iYm94LXNoYWRvdzogcmdiKDEzNiwgMTM2LCAxMzYpIDBweCAwcHggMTJweDsgY29sb3I6ICJd",
            "ZGl2W2NsYXNzJD0iLWhpZGUiXVt6b29tcGFnZS1mb250c2l6ZV1bc3R5bGU9ImRpc3BsYXk6IGJsb2NrOyJd",
            "LkJsb2NrTmFnX19DYXJk",
        ],
    ),
    (
        "fanboySocial",
        &[
            "LnRkLXRhZ3MtYW5kLXNvY2lhbC13cmFwcGVyLWJveA==",
            "LnR3aXR0ZXJDb250YWluZXI=",
            "LnlvdXR1YmUtc29jaWFs",
            "YVt0aXRsZV49Ikxpa2UgdXMgb24gRmFjZWJvb2siXQ==",
            "aW1nW2FsdF49IlNoYXJlIG9uIERpZ2ciXQ==",
        ],
    ),
    (
        "frellwitSwedish",
        &[
            "YVtocmVmKj0iY2FzaW5vcHJvLnNlIl1bdGFyZ2V0PSJfYmxhbmsiXQ==",
            "YVtocmVmKj0iZG9rdG9yLXNlLm9uZWxpbmsubWUiXQ==",
            "YXJ0aWNsZS5jYXRlZ29yeS1zYW1hcmJldGU=",
            "ZGl2LmhvbGlkQWRz",
            "dWwuYWRzbW9kZXJu",
        ],
    ),
    (
        "greekAdBlock",
        &[
            "QVtocmVmKj0iYWRtYW4ub3RlbmV0LmdyL2NsaWNrPyJd",
            "QVtocmVmKj0iaHR0cDovL2F4aWFiYW5uZXJzLmV4b2R1cy5nci8iXQ==",
            "QVtocmVmKj0iaHR0cDovL2ludGVyYWN0aXZlLmZvcnRobmV0LmdyL2NsaWNrPyJd",
            "RElWLmFnb3JlczMwMA==",
            "VEFCTEUuYWR2cmlnaHQ=",
        ],
    ),
    (
        "hungarian",
        &[
            "QVtocmVmKj0iYWQuZXZhbC5odSJd",
            "QVtocmVmKj0iYWQubmV0bWVkaWEuaHUiXQ==",
            "QVtocmVmKj0iZGFzZXJ2ZXIudWx0cmF3ZWIuaHUiXQ==",
            "I2NlbXBfZG9ib3o=",
            "Lm9wdGltb25rLWlmcmFtZS1jb250YWluZXI=",
        ],
    ),
    (
        "iDontCareAboutCookies",
        &[
            "LmFsZXJ0LWluZm9bZGF0YS1ibG9jay10cmFjayo9IkNvb2tpZU5vdGljZSJd",
            "Lk1vZHVsZVRlbXBsYXRlQ29va2llSW5kaWNhdG9y",
            "Lm8tLWNvb2tpZXMtLWNvbnRhaW5lcg==",
            "LmNvb2tpZS1tc2ctaW5mby1jb250YWluZXI=",
            "I2Nvb2tpZXMtcG9saWN5LXN0aWNreQ==",
        ],
    ),
    (
        "icelandicAbp",
        &[
            "QVtocmVmXj0iL2ZyYW1ld29yay9yZXNvdXJjZXMvZm9ybXMvYWRzLmFzcHgiXQ==",
        ],
    ),
    (
        "latvian",
        &[
            "YVtocmVmPSJodHRwOi8vd3d3LnNhbGlkemluaS5sdi8iXVtzdHlsZT0iZGlzcGxheTogYmxvY2s7IHdpZHRoOiAxMjBweDsgaGVpZ2h0OiA0MHB4OyBvdmVyZmxvdzogaGlkZGVuOyBwb3NpdGlvbjogcmVsYXRpdmU7Il0=",
            "YVtocmVmPSJodHRwOi8vd3d3LnNhbGlkemluaS5sdi8iXVtzdHlsZT0iZGlzcGxheTogYmxvY2s7IHdpZHRoOiA4OHB4OyBoZWlnaHQ6IDMxcHg7IG92ZXJmbG93OiBoaWRkZW47IHBvc2l0aW9uOiByZWxhdGl2ZTsiXQ==",
        ],
    ),
    (
        "listKr",
        &[
            "YVtocmVmKj0iLy9raW5ndG9vbi5zbG5rLmtyIl0=",
            "YVtocmVmKj0iLy9wbGF5ZHNiLmNvbS9rciJd",
            "ZGl2LmxvZ2x5LWxpZnQtYWR6",
            "ZGl2W2RhdGEtd2lkZ2V0X2lkPSJtbDZFSjA3NCJd",
            "aW5zLmRhdW1fZGRuX2FyZWE=",
        ],
    ),
    (
        "listeAr",
        &[
            "LmdlbWluaUxCMUFk",
            "LnJpZ2h0LWFuZC1sZWZ0LXNwb25zZXJz",
            "YVtocmVmKj0iLmFmbGFtLmluZm8iXQ==",
            "YVtocmVmKj0iYm9vcmFxLm9yZyJd",
            "YVtocmVmKj0iZHViaXp6bGUuY29tL2FyLz91dG1fc291cmNlPSJd",
        ],
    ),
    (
        "listeFr",
        &[
            "YVtocmVmXj0iaHR0cDovL3Byb21vLnZhZG9yLmNvbS8iXQ==",
            "I2FkY29udGFpbmVyX3JlY2hlcmNoZQ==",
            "YVtocmVmKj0id2Vib3JhbWEuZnIvZmNnaS1iaW4vIl0=",
            "LnNpdGUtcHViLWludGVyc3RpdGllbA==",
            "ZGl2W2lkXj0iY3J0LSJdW2RhdGEtY3JpdGVvLWlkXQ==",
        ],
    ),
    (
        "officialPolish",
        &[
            "I2NlbmVvLXBsYWNlaG9sZGVyLWNlbmVvLTEy",
            "W2hyZWZePSJodHRwczovL2FmZi5zZW5kaHViLnBsLyJd",
            "YVtocmVmXj0iaHR0cDovL2Fkdm1hbmFnZXIudGVjaGZ1bi5wbC9yZWRpcmVjdC8iXQ==",
            "YVtocmVmXj0iaHR0cDovL3d3dy50cml6ZXIucGwvP3V0bV9zb3VyY2UiXQ==",
            "ZGl2I3NrYXBpZWNfYWQ=",
        ],
    ),
    (
        "ro",
        &[
            "YVtocmVmXj0iLy9hZmZ0cmsuYWx0ZXgucm8vQ291bnRlci9DbGljayJd",
            "YVtocmVmXj0iL21hZ2F6aW4vIl0=",
            "YVtocmVmXj0iaHR0cHM6Ly9ibGFja2ZyaWRheXNhbGVzLnJvL3Ryay9zaG9wLyJd",
            "YVtocmVmXj0iaHR0cHM6Ly9ldmVudC4ycGVyZm9ybWFudC5jb20vZXZlbnRzL2NsaWNrIl0=",
            "YVtocmVmXj0iaHR0cHM6Ly9sLnByb2ZpdHNoYXJlLnJvLyJd",
        ],
    ),
    (
        "ruAd",
        &[
            "YVtocmVmKj0iLy9mZWJyYXJlLnJ1LyJd",
            "YVtocmVmKj0iLy91dGltZy5ydS8iXQ==",
            "YVtocmVmKj0iOi8vY2hpa2lkaWtpLnJ1Il0=",
            "I3BnZWxkaXo=",
            "LnlhbmRleC1ydGItYmxvY2s=",
        ],
    ),
    (
        "thaiAds",
        &[
            "YVtocmVmKj1tYWNhdS11dGEtcG9wdXBd",
            "I2Fkcy1nb29nbGUtbWlkZGxlX3JlY3RhbmdsZS1ncm91cA==",
            "LmFkczMwMHM=",
            "LmJ1bXE=",
            "LmltZy1rb3NhbmE=",
        ],
    ),
    (
        "webAnnoyancesUltralist",
        &[
            "I21vZC1zb2NpYWwtc2hhcmUtMg==",
            "I3NvY2lhbC10b29scw==",
            "LmN0cGwtZnVsbGJhbm5lcg==",
            "LnplcmduZXQtcmVjb21tZW5k",
            "Lnl0LmJ0bi1saW5rLmJ0bi1tZC5idG4=",
        ],
    ),
];
